use super::*;

#[test]
fn deserializes_camel_case_fields() {
    let raw = r#"{
        "id": "n42",
        "name": "Camping Am See",
        "coords": [13.1, 52.05],
        "matchingFilter": "tourism=camp_site",
        "kilometersFromStart": 12.34,
        "distanceKm": 0.5,
        "website": "https://camping.example",
        "openingHours": "Mo-Su 08:00-20:00"
    }"#;
    let poi: MapPoi = serde_json::from_str(raw).unwrap();
    assert_eq!(poi.id, "n42");
    assert_eq!(poi.coords, GeoPoint::new(13.1, 52.05));
    assert_eq!(poi.category(), Some("tourism=camp_site"));
    assert_eq!(poi.kilometers_from_start, Some(12.34));
    assert_eq!(poi.opening_hours.as_deref(), Some("Mo-Su 08:00-20:00"));
    assert!(poi.phone.is_none());
    assert!(poi.tags.is_none());
}

#[test]
fn blank_filter_has_no_category() {
    let raw = r#"{"id":"1","name":"x","coords":[0.0,0.0],"matchingFilter":""}"#;
    let poi: MapPoi = serde_json::from_str(raw).unwrap();
    assert_eq!(poi.category(), None);
}

#[test]
fn invalid_coords_are_rejected() {
    let raw = r#"{"id":"1","name":"x","coords":[0.0,95.0]}"#;
    assert!(serde_json::from_str::<MapPoi>(raw).is_err());
}
