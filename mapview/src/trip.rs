//! Trip documents: a track plus the POIs found along it.
//!
//! The planner page imports these as JSON:
//! `{ "track": [[lon, lat], ...], "pois": [ ... ] }`.

#[cfg(test)]
#[path = "trip_test.rs"]
mod trip_test;

use serde::Deserialize;

use crate::geo::{GeoError, GeoPoint};
use crate::poi::MapPoi;

/// Reasons a trip document is rejected.
#[derive(Debug, thiserror::Error)]
pub enum TripError {
    #[error("malformed trip document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("track point {index}: {source}")]
    TrackPoint { index: usize, source: GeoError },
}

#[derive(Deserialize)]
struct RawTrip {
    #[serde(default)]
    track: Vec<[f64; 2]>,
    #[serde(default)]
    pois: Vec<MapPoi>,
}

/// A validated track with its POIs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trip {
    pub track: Vec<GeoPoint>,
    pub pois: Vec<MapPoi>,
}

impl Trip {
    /// Parse and validate a trip document.
    ///
    /// # Errors
    ///
    /// [`TripError::Json`] for syntax or shape problems (including bad POI
    /// coordinates), [`TripError::TrackPoint`] for an invalid track point.
    pub fn from_json(raw: &str) -> Result<Self, TripError> {
        let parsed: RawTrip = serde_json::from_str(raw)?;
        let track = parsed
            .track
            .into_iter()
            .enumerate()
            .map(|(index, pair)| GeoPoint::try_from(pair).map_err(|source| TripError::TrackPoint { index, source }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { track, pois: parsed.pois })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.track.is_empty() && self.pois.is_empty()
    }
}
