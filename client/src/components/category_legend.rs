//! Category color legend for the loaded POIs.

use leptos::prelude::*;

use crate::state::map_view::MapViewState;

#[component]
pub fn CategoryLegend() -> impl IntoView {
    let map_view = expect_context::<RwSignal<MapViewState>>();
    let entries = Memo::new(move |_| {
        map_view.with(|state| {
            state
                .category_colors()
                .iter()
                .map(|(label, color)| (label.to_owned(), color.as_str()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <Show when=move || !entries.with(Vec::is_empty)>
            <ul class="category-legend">
                {move || {
                    entries
                        .get()
                        .into_iter()
                        .map(|(label, color)| {
                            view! {
                                <li class="category-legend__item">
                                    <span class=format!("category-legend__swatch category-legend__swatch--{color}")></span>
                                    <span class="category-legend__label">{label}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </Show>
    }
}
