//! Explanation page, written in Markdown.

#[cfg(test)]
#[path = "how_it_works_test.rs"]
mod how_it_works_test;

use leptos::prelude::*;

use crate::components::seo_meta::SeoMeta;
use crate::pages::site_info;
use crate::routes::{HOW_IT_WORKS_PATH, PLANNER_PATH};
use crate::util::markdown::render_markdown_html;
use crate::util::seo::{Keywords, SeoConfig};

pub const HOW_IT_WORKS_TITLE: &str = "How WhatsAround works";
pub const HOW_IT_WORKS_DESCRIPTION: &str =
    "From GPX track to points of interest: how WhatsAround searches OpenStreetMap along your route.";

pub(crate) const HOW_IT_WORKS_MARKDOWN: &str = "\
## 1. Load your route

Export a GPX track from your favourite planner. WhatsAround reads the track points
and draws them on the map.

## 2. Choose what you are looking for

Pick filters such as *drinking water*, *cafe*, or *camp site*. Each filter gets its own
marker color, assigned in the order the filters first appear in the results.

## 3. Explore the results

| Shown on hover | Shown on click |
|---|---|
| Name and distance from the start | Filter, distances, website, phone, opening hours |

The map keeps the whole track in view while panels are open. Once you pan or zoom
yourself it stays where you put it; the recenter button brings the track back.
";

#[component]
pub fn HowItWorksPage() -> impl IntoView {
    let config = SeoConfig::new(HOW_IT_WORKS_TITLE, HOW_IT_WORKS_DESCRIPTION, site_info().canonical(HOW_IT_WORKS_PATH))
        .with_keywords(Keywords::List(vec![
            "GPX".to_owned(),
            "OpenStreetMap".to_owned(),
            "how it works".to_owned(),
        ]));
    let body = render_markdown_html(HOW_IT_WORKS_MARKDOWN);

    view! {
        <SeoMeta config=config/>
        <main class="article">
            <h1>{HOW_IT_WORKS_TITLE}</h1>
            <div class="article__body" inner_html=body></div>
            <a class="button button--primary" href=PLANNER_PATH>"Try it"</a>
        </main>
    }
}
