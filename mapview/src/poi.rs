//! Points of interest found along a track.

#[cfg(test)]
#[path = "poi_test.rs"]
mod poi_test;

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// A POI as returned by the planner backend (camelCase JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPoi {
    pub id: String,
    pub name: String,
    pub coords: GeoPoint,
    /// The search filter that matched this POI; doubles as its category.
    #[serde(default)]
    pub matching_filter: Option<String>,
    #[serde(default)]
    pub kilometers_from_start: Option<f64>,
    /// Distance from the track, in kilometers.
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
}

impl MapPoi {
    /// Category label, `None` when absent or blank.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.matching_filter.as_deref().filter(|label| !label.is_empty())
    }
}
