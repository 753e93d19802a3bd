//! Base map tile sources.

#[cfg(test)]
#[path = "tiles_test.rs"]
mod tiles_test;

use serde::{Deserialize, Serialize};

/// One selectable tile layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSource {
    pub id: String,
    pub name: String,
    /// Leaflet URL template (`{s}`, `{z}`, `{x}`, `{y}`).
    pub url: String,
    /// Attribution HTML shown in the map corner.
    pub attribution: String,
}

impl TileSource {
    fn new(id: &str, name: &str, url: &str, attribution: &str) -> Self {
        Self { id: id.to_owned(), name: name.to_owned(), url: url.to_owned(), attribution: attribution.to_owned() }
    }
}

/// Tile layers offered by the tile selector; the first is the default.
#[must_use]
pub fn default_tile_sources() -> Vec<TileSource> {
    vec![
        TileSource::new(
            "osm",
            "OpenStreetMap",
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
        ),
        TileSource::new(
            "topo",
            "OpenTopoMap",
            "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
            "Map data: &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors, \
             SRTM | Map style: &copy; <a href=\"https://opentopomap.org\">OpenTopoMap</a> (CC-BY-SA)",
        ),
        TileSource::new(
            "cyclosm",
            "CyclOSM",
            "https://{s}.tile-cyclosm.openstreetmap.fr/cyclosm/{z}/{x}/{y}.png",
            "<a href=\"https://www.cyclosm.org\">CyclOSM</a> | Map data: &copy; \
             <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
        ),
    ]
}

/// Source with `id`, falling back to the first source for unknown ids.
#[must_use]
pub fn resolve_tile_source<'a>(sources: &'a [TileSource], id: &str) -> Option<&'a TileSource> {
    sources.iter().find(|s| s.id == id).or_else(|| sources.first())
}
