use super::*;

const TRIP: &str = r#"{
    "track": [[13.4, 52.5], [13.5, 52.6]],
    "pois": [
        { "id": "a", "name": "Cafe", "coords": [13.41, 52.51], "matchingFilter": "cafe" },
        { "id": "b", "name": "Well", "coords": [13.45, 52.55], "matchingFilter": "water" },
        { "id": "c", "name": "Cafe 2", "coords": [13.46, 52.56], "matchingFilter": "cafe" }
    ]
}"#;

#[test]
fn default_state_uses_first_tile_source() {
    let state = MapViewState::default();
    assert_eq!(state.tile_id, "osm");
    assert_eq!(state.active_tile().map(|s| s.id.as_str()), Some("osm"));
    assert!(!state.tile_menu_open);
    assert!(state.sheet_open);
    assert!(state.trip.is_empty());
    assert!(!state.can_recenter);
}

#[test]
fn preferred_tile_applies_only_when_known() {
    assert_eq!(MapViewState::with_preferred_tile(Some("topo".into())).tile_id, "topo");
    assert_eq!(MapViewState::with_preferred_tile(Some("nope".into())).tile_id, "osm");
    assert_eq!(MapViewState::with_preferred_tile(None).tile_id, "osm");
}

#[test]
fn select_tile_switches_and_closes_menu() {
    let mut state = MapViewState::default();
    state.toggle_tile_menu();
    assert!(state.tile_menu_open);
    assert!(state.select_tile("cyclosm"));
    assert_eq!(state.tile_id, "cyclosm");
    assert!(!state.tile_menu_open);
}

#[test]
fn select_unknown_tile_keeps_current() {
    let mut state = MapViewState::default();
    state.toggle_tile_menu();
    assert!(!state.select_tile("satellite"));
    assert_eq!(state.tile_id, "osm");
    assert!(!state.tile_menu_open);
}

#[test]
fn toggle_sheet_flips() {
    let mut state = MapViewState::default();
    state.toggle_sheet();
    assert!(!state.sheet_open);
    state.toggle_sheet();
    assert!(state.sheet_open);
}

#[test]
fn load_trip_json_replaces_trip() {
    let mut state = MapViewState::default();
    assert!(state.load_trip_json(TRIP));
    assert_eq!(state.trip.track.len(), 2);
    assert_eq!(state.trip.pois.len(), 3);
    assert!(state.import_error.is_none());
}

#[test]
fn invalid_trip_keeps_previous_and_records_error() {
    let mut state = MapViewState::default();
    assert!(state.load_trip_json(TRIP));
    assert!(!state.load_trip_json(r#"{ "track": [[200.0, 10.0]], "pois": [] }"#));
    assert_eq!(state.trip.track.len(), 2);
    let message = state.import_error.clone().unwrap_or_default();
    assert!(message.contains("track point 0"), "{message}");
}

#[test]
fn clear_trip_resets_error() {
    let mut state = MapViewState::default();
    assert!(!state.load_trip_json("not json"));
    state.clear_trip();
    assert!(state.trip.is_empty());
    assert!(state.import_error.is_none());
}

#[test]
fn command_sequences_increment() {
    let mut state = MapViewState::default();
    state.request_recenter();
    state.request_recenter();
    state.request_locate();
    assert_eq!(state.recenter_seq, 2);
    assert_eq!(state.locate_seq, 1);
}

#[test]
fn category_colors_follow_first_seen_order() {
    let mut state = MapViewState::default();
    assert!(state.load_trip_json(TRIP));
    let colors = state.category_colors();
    let labels: Vec<&str> = colors.iter().map(|(label, _)| label).collect();
    assert_eq!(labels, vec!["cafe", "water"]);
}
