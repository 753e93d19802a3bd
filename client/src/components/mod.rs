//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write shared state from Leptos context providers; the
//! map host is the only one that talks to Leaflet.

pub mod category_legend;
pub mod interactive_map;
pub mod map_controls;
pub mod seo_meta;
pub mod trip_import;
