//! Planner page state: loaded trip, tile choice, and panel toggles.
//!
//! DESIGN
//! ======
//! Map commands (recenter, locate) are sequence counters so the map host can
//! react to each press once, even when two presses produce equal state.

#[cfg(test)]
#[path = "map_view_test.rs"]
mod map_view_test;

use mapview::palette::CategoryColorMap;
use mapview::tiles::{TileSource, default_tile_sources, resolve_tile_source};
use mapview::trip::Trip;

#[derive(Clone, Debug)]
pub struct MapViewState {
    pub trip: Trip,
    pub tile_sources: Vec<TileSource>,
    pub tile_id: String,
    pub tile_menu_open: bool,
    pub sheet_open: bool,
    pub import_error: Option<String>,
    pub recenter_seq: u64,
    pub locate_seq: u64,
    /// Mirrors the fitter's recenter availability for the control button.
    pub can_recenter: bool,
}

impl Default for MapViewState {
    fn default() -> Self {
        let tile_sources = default_tile_sources();
        let tile_id = tile_sources.first().map(|s| s.id.clone()).unwrap_or_default();
        Self {
            trip: Trip::default(),
            tile_sources,
            tile_id,
            tile_menu_open: false,
            sheet_open: true,
            import_error: None,
            recenter_seq: 0,
            locate_seq: 0,
            can_recenter: false,
        }
    }
}

impl MapViewState {
    /// Default state with a persisted tile id applied when it is known.
    #[must_use]
    pub fn with_preferred_tile(preferred: Option<String>) -> Self {
        let mut state = Self::default();
        if let Some(id) = preferred {
            if state.tile_sources.iter().any(|s| s.id == id) {
                state.tile_id = id;
            }
        }
        state
    }

    #[must_use]
    pub fn active_tile(&self) -> Option<&TileSource> {
        resolve_tile_source(&self.tile_sources, &self.tile_id)
    }

    /// Switch tiles and close the menu. Returns `false` for unknown ids.
    pub fn select_tile(&mut self, id: &str) -> bool {
        self.tile_menu_open = false;
        if !self.tile_sources.iter().any(|s| s.id == id) {
            return false;
        }
        self.tile_id = id.to_owned();
        true
    }

    pub fn toggle_tile_menu(&mut self) {
        self.tile_menu_open = !self.tile_menu_open;
    }

    pub fn toggle_sheet(&mut self) {
        self.sheet_open = !self.sheet_open;
    }

    /// Replace the trip from a JSON document. On error the current trip stays.
    pub fn load_trip_json(&mut self, raw: &str) -> bool {
        match Trip::from_json(raw) {
            Ok(trip) => {
                self.trip = trip;
                self.import_error = None;
                true
            }
            Err(e) => {
                self.import_error = Some(e.to_string());
                false
            }
        }
    }

    pub fn clear_trip(&mut self) {
        self.trip = Trip::default();
        self.import_error = None;
    }

    pub fn request_recenter(&mut self) {
        self.recenter_seq += 1;
    }

    pub fn request_locate(&mut self) {
        self.locate_seq += 1;
    }

    #[must_use]
    pub fn category_colors(&self) -> CategoryColorMap {
        CategoryColorMap::from_pois(&self.trip.pois)
    }
}
