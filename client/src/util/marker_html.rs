//! HTML strings for Leaflet tooltips and popups.
//!
//! Leaflet inserts these with `innerHTML`, so every POI-provided value is
//! escaped and only `http(s)` website values become links.

#[cfg(test)]
#[path = "marker_html_test.rs"]
mod marker_html_test;

use mapview::marker::{PopupContent, PopupValue, TooltipContent};

#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn is_web_url(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[must_use]
pub fn tooltip_html(content: &TooltipContent) -> String {
    let mut html = format!("<div class=\"poi-tooltip\"><strong>{}</strong>", escape_html(&content.title));
    if let Some(line) = &content.distance_line {
        html.push_str(&format!("<br/><span>{}</span>", escape_html(line)));
    }
    html.push_str(&format!("<br/><em>{}</em></div>", escape_html(content.hint)));
    html
}

#[must_use]
pub fn popup_html(content: &PopupContent) -> String {
    let mut html = format!("<div class=\"poi-popup\"><h3>{}</h3>", escape_html(&content.title));
    for row in &content.rows {
        let value = match &row.value {
            PopupValue::Text(text) => escape_html(text),
            PopupValue::Link(url) if is_web_url(url) => {
                let url = escape_html(url);
                format!("<a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">{url}</a>")
            }
            PopupValue::Link(url) => escape_html(url),
        };
        html.push_str(&format!("<p><strong>{}:</strong> {value}</p>", row.label));
    }
    html.push_str("</div>");
    html
}
