//! # client
//!
//! Leptos frontend for the WhatsAround trip planner: landing and explanation
//! pages with SEO metadata, and the planner page hosting the interactive map.
//!
//! The map's fitting rules live in the `mapview` crate; this crate wires them
//! to Leaflet and the DOM through the bridges in [`util::leaflet`] and
//! [`util::dom_probe`] (browser builds only).

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
