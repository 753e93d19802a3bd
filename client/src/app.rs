//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{home::HomePage, how_it_works::HowItWorksPage, planner::PlannerPage};
use crate::routes::{HOME_PATH, Page};
use crate::state::map_view::MapViewState;
use crate::util::seo::SiteInfo;
use crate::util::tile_preference;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// HTML shell rendered on the server for SSR + hydration.
///
/// Leaflet loads synchronously ahead of the WASM bundle so `L` exists when
/// the map mounts.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=LEAFLET_CSS/>
                <script src=LEAFLET_JS></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the site info and map view contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    if use_context::<SiteInfo>().is_none() {
        provide_context(SiteInfo::from_browser().unwrap_or_default());
    }
    let map_view = RwSignal::new(MapViewState::with_preferred_tile(tile_preference::read()));
    provide_context(map_view);

    view! {
        <Stylesheet id="leptos" href="/pkg/whatsaround.css"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=HOME_PATH/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                <Route path=StaticSegment(Page::Home.segment()) view=HomePage/>
                <Route path=StaticSegment(Page::Planner.segment()) view=PlannerPage/>
                <Route path=StaticSegment(Page::HowItWorks.segment()) view=HowItWorksPage/>
            </Routes>
        </Router>
    }
}
