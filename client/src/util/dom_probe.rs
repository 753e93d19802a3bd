//! Reads the browser viewport and overlay panel rectangles for the fitter.
//!
//! Hydrate-only: everything here goes through `web_sys`.

#[cfg(feature = "hydrate")]
use mapview::consts::OVERLAY_SELECTOR;
#[cfg(feature = "hydrate")]
use mapview::overlay::{ScreenRect, ViewportProbe, ViewportSize};
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Probe over the live document; overlays are elements matching `.sheet`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DomProbe;

#[cfg(feature = "hydrate")]
impl ViewportProbe for DomProbe {
    fn viewport(&self) -> Option<ViewportSize> {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(ViewportSize::new(width, height))
    }

    fn overlays(&self) -> Vec<ScreenRect> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let Ok(nodes) = document.query_selector_all(OVERLAY_SELECTOR) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                ScreenRect::new(rect.left(), rect.top(), rect.right(), rect.bottom())
            })
            .collect()
    }
}
