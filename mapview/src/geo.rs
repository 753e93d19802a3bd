//! Geographic primitives: points, bounding boxes, and track signatures.
//!
//! Coordinates are WGS84 degrees stored longitude-first, matching the
//! `[lon, lat]` pairs the planner backend emits. Leaflet wants latitude first;
//! the conversion happens at the bridge through [`GeoPoint::lat_lng`] and
//! [`GeoBounds::lat_lng_corners`].

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use serde::{Deserialize, Serialize};

/// Rejected coordinate input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    #[error("coordinate is not finite: ({lon}, {lat})")]
    NonFinite { lon: f64, lat: f64 },
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
}

/// A WGS84 position, longitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[must_use]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Build a point, rejecting non-finite or out-of-range degrees.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError`] naming the offending component.
    pub fn try_new(lon: f64, lat: f64) -> Result<Self, GeoError> {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(GeoError::NonFinite { lon, lat });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(GeoError::LongitudeOutOfRange(lon));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::LatitudeOutOfRange(lat));
        }
        Ok(Self { lon, lat })
    }

    /// `[lat, lon]`, the order Leaflet expects.
    #[must_use]
    pub fn lat_lng(self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

impl TryFrom<[f64; 2]> for GeoPoint {
    type Error = GeoError;

    fn try_from([lon, lat]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::try_new(lon, lat)
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        [point.lon, point.lat]
    }
}

/// Axis-aligned geographic bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl GeoBounds {
    /// Smallest box containing every point, or `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let seed = Self { west: first.lon, south: first.lat, east: first.lon, north: first.lat };
        Some(rest.iter().fold(seed, |b, p| Self {
            west: b.west.min(p.lon),
            south: b.south.min(p.lat),
            east: b.east.max(p.lon),
            north: b.north.max(p.lat),
        }))
    }

    #[must_use]
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.west..=self.east).contains(&point.lon) && (self.south..=self.north).contains(&point.lat)
    }

    /// True when the box collapses to a single position (one-point track).
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.west.total_cmp(&self.east).is_eq() && self.south.total_cmp(&self.north).is_eq()
    }

    #[must_use]
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new((self.west + self.east) * 0.5, (self.south + self.north) * 0.5)
    }

    /// `[[south, west], [north, east]]` for `L.latLngBounds`.
    #[must_use]
    pub fn lat_lng_corners(&self) -> [[f64; 2]; 2] {
        [[self.south, self.west], [self.north, self.east]]
    }
}

/// Cheap identity of a track: point count plus both endpoints.
///
/// Two tracks sharing count and endpoints compare equal even when the points
/// in between differ. Re-fit decisions rely on that approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSignature {
    pub len: usize,
    pub first: GeoPoint,
    pub last: GeoPoint,
}

impl TrackSignature {
    /// Signature of `track`; an empty track has none.
    #[must_use]
    pub fn of(track: &[GeoPoint]) -> Option<Self> {
        let first = *track.first()?;
        let last = *track.last()?;
        Some(Self { len: track.len(), first, last })
    }
}
