//! Trip document picker for the planner sheet.

use leptos::prelude::*;

use crate::state::map_view::MapViewState;

#[component]
pub fn TripImport() -> impl IntoView {
    let map_view = expect_context::<RwSignal<MapViewState>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = input_ref.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let name = file.name();
            leptos::task::spawn_local(async move {
                match wasm_bindgen_futures::JsFuture::from(file.text()).await {
                    Ok(text) => {
                        let raw = text.as_string().unwrap_or_default();
                        let mut loaded = false;
                        map_view.update(|s| loaded = s.load_trip_json(&raw));
                        if loaded {
                            log::info!("loaded trip from {name}");
                        } else {
                            log::warn!("rejected trip file {name}");
                        }
                    }
                    Err(err) => {
                        log::warn!("could not read {name}: {err:?}");
                        map_view.update(|s| s.import_error = Some(format!("Could not read {name}")));
                    }
                }
            });
        }
    };

    view! {
        <div class="trip-import">
            <label class="trip-import__label">
                "Load trip (JSON)"
                <input node_ref=input_ref type="file" accept="application/json,.json" on:change=on_change/>
            </label>
            <button class="trip-import__clear" on:click=move |_| map_view.update(MapViewState::clear_trip)>
                "Clear"
            </button>
            {move || {
                map_view
                    .with(|s| s.import_error.clone())
                    .map(|message| view! { <p class="trip-import__error" role="alert">{message}</p> })
            }}
        </div>
    }
}
