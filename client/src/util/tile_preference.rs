//! Persisted base-map choice.
//!
//! The selected tile source id is kept in `localStorage` so the planner
//! reopens on the same layer. Outside the browser both calls are no-ops.

#[cfg(test)]
#[path = "tile_preference_test.rs"]
mod tile_preference_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "whatsaround_tile_layer";

/// Stored tile source id, if any.
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok()?.filter(|id| !id.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remember `id` as the preferred tile source.
pub fn store(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, id);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
