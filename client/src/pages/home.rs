//! Landing page.

use leptos::prelude::*;

use crate::components::seo_meta::SeoMeta;
use crate::pages::site_info;
use crate::routes::{HOME_PATH, HOW_IT_WORKS_PATH, PLANNER_PATH};
use crate::util::seo::SeoConfig;

pub const HOME_TITLE: &str = "WhatsAround | Find places along your route";
pub const HOME_DESCRIPTION: &str = "Upload a GPX track and discover cafes, water, shelter, and other points of \
                                    interest along the way, powered by OpenStreetMap.";

#[component]
pub fn HomePage() -> impl IntoView {
    let config = SeoConfig::new(HOME_TITLE, HOME_DESCRIPTION, site_info().canonical(HOME_PATH));

    view! {
        <SeoMeta config=config/>
        <main class="landing">
            <header class="landing__hero">
                <h1>"WhatsAround"</h1>
                <p class="landing__tagline">{HOME_DESCRIPTION}</p>
                <div class="landing__actions">
                    <a class="button button--primary" href=PLANNER_PATH>"Open the planner"</a>
                    <a class="button" href=HOW_IT_WORKS_PATH>"How it works"</a>
                </div>
            </header>
            <section class="landing__features">
                <article>
                    <h2>"Route first"</h2>
                    <p>"Search along your actual track instead of around a single point."</p>
                </article>
                <article>
                    <h2>"Open data"</h2>
                    <p>"Every place comes from OpenStreetMap, with opening hours and contact details when known."</p>
                </article>
                <article>
                    <h2>"Color coded"</h2>
                    <p>"Each search filter gets its own marker color so categories stay apart on the map."</p>
                </article>
            </section>
        </main>
    }
}
