//! Marker icon and the text shown in marker tooltips and popups.
//!
//! Content is assembled here as plain data; the client turns it into
//! escaped HTML for Leaflet.

#[cfg(test)]
#[path = "marker_test.rs"]
mod marker_test;

use crate::palette::MarkerColor;
use crate::poi::MapPoi;

const ICON_URL_PREFIX: &str =
    "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-2x-";
const SHADOW_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/images/marker-shadow.png";

/// Hint shown under the tooltip text.
pub const TOOLTIP_HINT: &str = "Click for more details";

/// `L.icon` options for a colored pin.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIcon {
    pub icon_url: String,
    pub shadow_url: &'static str,
    pub icon_size: [f64; 2],
    pub icon_anchor: [f64; 2],
    pub popup_anchor: [f64; 2],
    pub shadow_size: [f64; 2],
}

impl MarkerIcon {
    #[must_use]
    pub fn for_color(color: MarkerColor) -> Self {
        Self {
            icon_url: format!("{ICON_URL_PREFIX}{}.png", color.as_str()),
            shadow_url: SHADOW_URL,
            icon_size: [25.0, 41.0],
            icon_anchor: [12.0, 41.0],
            popup_anchor: [1.0, -34.0],
            shadow_size: [41.0, 41.0],
        }
    }
}

/// Hover tooltip: name, distance along the track, and a hint.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub title: String,
    pub distance_line: Option<String>,
    pub hint: &'static str,
}

impl TooltipContent {
    #[must_use]
    pub fn for_poi(poi: &MapPoi) -> Self {
        Self {
            title: poi.name.clone(),
            distance_line: poi
                .kilometers_from_start
                .map(|km| format!("{} km from start", format_km(km, 1))),
            hint: TOOLTIP_HINT,
        }
    }
}

/// Value cell of a popup row.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupValue {
    Text(String),
    /// Rendered as a link opening in a new tab; the URL is also the label.
    Link(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupRow {
    pub label: &'static str,
    pub value: PopupValue,
}

/// Click popup with every known detail of a POI.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub title: String,
    pub rows: Vec<PopupRow>,
}

impl PopupContent {
    #[must_use]
    pub fn for_poi(poi: &MapPoi) -> Self {
        let mut rows = Vec::new();
        let mut text = |label: &'static str, value: Option<String>| {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                rows.push(PopupRow { label, value: PopupValue::Text(value) });
            }
        };
        text("Filter", poi.category().map(str::to_owned));
        text("Distance from start", poi.kilometers_from_start.map(|km| format!("{} km", format_km(km, 1))));
        text("Distance from track", poi.distance_km.map(|km| format!("{} km", format_km(km, 2))));

        if let Some(url) = poi.website.as_ref().filter(|u| !u.is_empty()) {
            rows.push(PopupRow { label: "Website", value: PopupValue::Link(url.clone()) });
        }
        for (label, value) in [("Phone", &poi.phone), ("Opening hours", &poi.opening_hours)] {
            if let Some(value) = value.as_ref().filter(|v| !v.is_empty()) {
                rows.push(PopupRow { label, value: PopupValue::Text(value.clone()) });
            }
        }

        Self { title: poi.name.clone(), rows }
    }
}

/// Fixed-precision kilometers, e.g. `format_km(12.345, 1) == "12.3"`.
#[must_use]
pub fn format_km(km: f64, decimals: usize) -> String {
    format!("{km:.decimals$}")
}
