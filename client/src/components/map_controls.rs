//! Floating map buttons: recenter, locate, and the tile selector.
//!
//! Buttons only write to [`MapViewState`]; the map host performs the work.

use leptos::prelude::*;

use crate::state::map_view::MapViewState;
use crate::util::tile_preference;

pub const RECENTER_TITLE: &str = "Recenter to track";
pub const RECENTER_DISABLED_TITLE: &str = "Load a track to recenter";

#[component]
pub fn RecenterButton() -> impl IntoView {
    let map_view = expect_context::<RwSignal<MapViewState>>();
    let enabled = move || map_view.with(|s| s.can_recenter);

    view! {
        <button
            class="recenter-control"
            title=move || if enabled() { RECENTER_TITLE } else { RECENTER_DISABLED_TITLE }
            aria-label=RECENTER_TITLE
            disabled=move || !enabled()
            on:click=move |_| {
                if map_view.with_untracked(|s| s.can_recenter) {
                    map_view.update(MapViewState::request_recenter);
                }
            }
        >
            "⌖"
        </button>
    }
}

#[component]
pub fn LocateButton() -> impl IntoView {
    let map_view = expect_context::<RwSignal<MapViewState>>();
    view! {
        <button
            class="locate-control"
            title="Locate me"
            aria-label="Locate me"
            on:click=move |_| map_view.update(MapViewState::request_locate)
        >
            "◎"
        </button>
    }
}

#[component]
pub fn TileSelector() -> impl IntoView {
    let map_view = expect_context::<RwSignal<MapViewState>>();

    view! {
        <div class="tile-control-wrapper">
            <button
                class="tile-control"
                title="Switch map tiles"
                aria-label="Switch map tiles"
                on:click=move |_| map_view.update(MapViewState::toggle_tile_menu)
            >
                "▤"
            </button>
            <Show when=move || map_view.with(|s| s.tile_menu_open)>
                <div class="tile-popover" role="menu">
                    {move || {
                        let (sources, active) = map_view.with(|s| (s.tile_sources.clone(), s.tile_id.clone()));
                        sources
                            .into_iter()
                            .map(|source| {
                                let id = source.id.clone();
                                let class = if source.id == active { "tile-option active" } else { "tile-option" };
                                view! {
                                    <button
                                        class=class
                                        role="menuitem"
                                        on:click=move |_| {
                                            let mut changed = false;
                                            map_view.update(|s| changed = s.select_tile(&id));
                                            if changed {
                                                tile_preference::store(&id);
                                            }
                                        }
                                    >
                                        {source.name}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
