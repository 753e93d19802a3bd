#![allow(clippy::float_cmp)]

use super::*;

fn pt(lon: f64, lat: f64) -> GeoPoint {
    GeoPoint::new(lon, lat)
}

// --- GeoPoint ---

#[test]
fn try_new_accepts_valid_coordinates() {
    let p = GeoPoint::try_new(13.405, 52.52).unwrap();
    assert_eq!(p.lon, 13.405);
    assert_eq!(p.lat, 52.52);
}

#[test]
fn try_new_accepts_range_limits() {
    assert!(GeoPoint::try_new(-180.0, -90.0).is_ok());
    assert!(GeoPoint::try_new(180.0, 90.0).is_ok());
}

#[test]
fn try_new_rejects_non_finite() {
    assert!(matches!(GeoPoint::try_new(f64::NAN, 0.0), Err(GeoError::NonFinite { .. })));
    assert!(matches!(GeoPoint::try_new(0.0, f64::INFINITY), Err(GeoError::NonFinite { .. })));
}

#[test]
fn try_new_rejects_out_of_range() {
    assert_eq!(GeoPoint::try_new(180.5, 0.0), Err(GeoError::LongitudeOutOfRange(180.5)));
    assert_eq!(GeoPoint::try_new(0.0, -91.0), Err(GeoError::LatitudeOutOfRange(-91.0)));
}

#[test]
fn lat_lng_swaps_order() {
    assert_eq!(pt(13.0, 52.0).lat_lng(), [52.0, 13.0]);
}

#[test]
fn deserializes_from_lon_lat_pair() {
    let p: GeoPoint = serde_json::from_str("[13.1, 52.05]").unwrap();
    assert_eq!(p, pt(13.1, 52.05));
}

#[test]
fn deserialize_rejects_invalid_pair() {
    let result: Result<GeoPoint, _> = serde_json::from_str("[200.0, 10.0]");
    let err = result.unwrap_err().to_string();
    assert!(err.contains("longitude 200"), "{err}");
}

#[test]
fn serializes_as_lon_lat_pair() {
    assert_eq!(serde_json::to_string(&pt(1.5, 2.5)).unwrap(), "[1.5,2.5]");
}

// --- GeoBounds ---

#[test]
fn bounds_of_empty_slice_is_none() {
    assert!(GeoBounds::from_points(&[]).is_none());
}

#[test]
fn bounds_cover_all_points() {
    let track = [pt(13.0, 52.0), pt(13.1, 52.05), pt(13.2, 52.1)];
    let b = GeoBounds::from_points(&track).unwrap();
    assert_eq!(b, GeoBounds { west: 13.0, south: 52.0, east: 13.2, north: 52.1 });
    assert!(track.iter().all(|p| b.contains(*p)));
}

#[test]
fn bounds_handle_unsorted_points() {
    let b = GeoBounds::from_points(&[pt(5.0, -3.0), pt(-2.0, 4.0), pt(1.0, 0.0)]).unwrap();
    assert_eq!(b.west, -2.0);
    assert_eq!(b.east, 5.0);
    assert_eq!(b.south, -3.0);
    assert_eq!(b.north, 4.0);
}

#[test]
fn single_point_bounds_degenerate_to_point() {
    let b = GeoBounds::from_points(&[pt(13.4, 52.5)]).unwrap();
    assert!(b.is_point());
    assert_eq!(b.center(), pt(13.4, 52.5));
}

#[test]
fn lat_lng_corners_are_south_west_then_north_east() {
    let b = GeoBounds { west: 1.0, south: 2.0, east: 3.0, north: 4.0 };
    assert_eq!(b.lat_lng_corners(), [[2.0, 1.0], [4.0, 3.0]]);
}

#[test]
fn contains_rejects_outside_point() {
    let b = GeoBounds { west: 0.0, south: 0.0, east: 1.0, north: 1.0 };
    assert!(!b.contains(pt(1.5, 0.5)));
}

// --- TrackSignature ---

#[test]
fn empty_track_has_no_signature() {
    assert!(TrackSignature::of(&[]).is_none());
}

#[test]
fn signature_ignores_intermediate_points() {
    let a = [pt(13.0, 52.0), pt(13.1, 52.05), pt(13.2, 52.1)];
    let b = [pt(13.0, 52.0), pt(99.0, -10.0), pt(13.2, 52.1)];
    assert_eq!(TrackSignature::of(&a), TrackSignature::of(&b));
}

#[test]
fn signature_differs_on_length() {
    let a = [pt(0.0, 0.0), pt(1.0, 1.0)];
    let b = [pt(0.0, 0.0), pt(0.5, 0.5), pt(1.0, 1.0)];
    assert_ne!(TrackSignature::of(&a), TrackSignature::of(&b));
}

#[test]
fn signature_differs_on_endpoints() {
    let a = [pt(0.0, 0.0), pt(1.0, 1.0)];
    let b = [pt(0.0, 0.0), pt(1.0, 1.5)];
    assert_ne!(TrackSignature::of(&a), TrackSignature::of(&b));
}

#[test]
fn single_point_signature_uses_same_point_twice() {
    let sig = TrackSignature::of(&[pt(2.0, 3.0)]).unwrap();
    assert_eq!(sig.len, 1);
    assert_eq!(sig.first, sig.last);
}
