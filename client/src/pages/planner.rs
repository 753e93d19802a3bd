//! Planner page: full-screen map with a collapsible side sheet.
//!
//! The sheet carries the `sheet` class, which is what the map's overlay
//! probe measures when padding fits.

use leptos::prelude::*;

use crate::components::category_legend::CategoryLegend;
use crate::components::interactive_map::InteractiveMap;
use crate::components::seo_meta::SeoMeta;
use crate::components::trip_import::TripImport;
use crate::pages::site_info;
use crate::routes::PLANNER_PATH;
use crate::state::map_view::MapViewState;
use crate::util::seo::SeoConfig;

pub const PLANNER_TITLE: &str = "WhatsAround planner";
pub const PLANNER_DESCRIPTION: &str = "Plan a trip and see points of interest along your track.";

#[component]
pub fn PlannerPage() -> impl IntoView {
    let map_view = expect_context::<RwSignal<MapViewState>>();
    let config = SeoConfig::new(PLANNER_TITLE, PLANNER_DESCRIPTION, site_info().canonical(PLANNER_PATH));

    let summary = move || {
        map_view.with(|s| match (s.trip.track.len(), s.trip.pois.len()) {
            (0, 0) => "No trip loaded".to_owned(),
            (points, pois) => format!("{points} track points, {pois} places"),
        })
    };

    view! {
        <SeoMeta config=config/>
        <div class="planner">
            <InteractiveMap/>
            <aside class="sheet" class:sheet--collapsed=move || !map_view.with(|s| s.sheet_open)>
                <button
                    class="sheet__toggle"
                    aria-label="Toggle panel"
                    on:click=move |_| map_view.update(MapViewState::toggle_sheet)
                >
                    {move || if map_view.with(|s| s.sheet_open) { "Hide" } else { "Show" }}
                </button>
                <Show when=move || map_view.with(|s| s.sheet_open)>
                    <div class="sheet__body">
                        <h2>"Trip"</h2>
                        <p class="sheet__summary">{summary}</p>
                        <TripImport/>
                        <CategoryLegend/>
                    </div>
                </Show>
            </aside>
        </div>
    }
}
