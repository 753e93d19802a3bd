//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser concerns (DOM reads, Leaflet, animation frames, storage) live here
//! so pages and components stay declarative.

pub mod dom_probe;
#[cfg(feature = "hydrate")]
pub mod leaflet;
pub mod marker_html;
pub mod markdown;
pub mod next_frame;
pub mod seo;
pub mod tile_preference;
