use super::*;

#[test]
fn copy_renders_three_steps() {
    let html = render_markdown_html(HOW_IT_WORKS_MARKDOWN);
    assert_eq!(html.matches("<h2>").count(), 3);
    assert!(html.contains("<h2>1. Load your route</h2>"));
}

#[test]
fn copy_renders_details_table() {
    let html = render_markdown_html(HOW_IT_WORKS_MARKDOWN);
    assert!(html.contains("<table>"));
    assert!(html.contains("Shown on click"));
}
