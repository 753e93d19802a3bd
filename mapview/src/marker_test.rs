use super::*;
use crate::geo::GeoPoint;

fn full_poi() -> MapPoi {
    MapPoi {
        id: "n1".to_owned(),
        name: "Bäckerei Schmidt".to_owned(),
        coords: GeoPoint::new(13.1, 52.05),
        matching_filter: Some("shop=bakery".to_owned()),
        kilometers_from_start: Some(12.345),
        distance_km: Some(0.456),
        website: Some("https://baeckerei.example".to_owned()),
        phone: Some("+49 30 1234".to_owned()),
        opening_hours: Some("Mo-Sa 06:00-18:00".to_owned()),
        tags: None,
    }
}

fn bare_poi() -> MapPoi {
    MapPoi {
        matching_filter: None,
        kilometers_from_start: None,
        distance_km: None,
        website: None,
        phone: Some(String::new()),
        opening_hours: None,
        ..full_poi()
    }
}

#[test]
fn icon_url_embeds_color_name() {
    let icon = MarkerIcon::for_color(MarkerColor::LightBlue);
    assert!(icon.icon_url.ends_with("marker-icon-2x-lightblue.png"));
    assert_eq!(icon.icon_size, [25.0, 41.0]);
    assert_eq!(icon.icon_anchor, [12.0, 41.0]);
    assert_eq!(icon.popup_anchor, [1.0, -34.0]);
    assert_eq!(icon.shadow_size, [41.0, 41.0]);
}

#[test]
fn tooltip_shows_distance_with_one_decimal() {
    let tooltip = TooltipContent::for_poi(&full_poi());
    assert_eq!(tooltip.title, "Bäckerei Schmidt");
    assert_eq!(tooltip.distance_line.as_deref(), Some("12.3 km from start"));
    assert_eq!(tooltip.hint, TOOLTIP_HINT);
}

#[test]
fn tooltip_without_distance_omits_line() {
    assert!(TooltipContent::for_poi(&bare_poi()).distance_line.is_none());
}

#[test]
fn popup_lists_rows_in_display_order() {
    let popup = PopupContent::for_poi(&full_poi());
    let labels: Vec<_> = popup.rows.iter().map(|r| r.label).collect();
    assert_eq!(
        labels,
        ["Filter", "Distance from start", "Distance from track", "Website", "Phone", "Opening hours"]
    );
    assert_eq!(popup.rows[1].value, PopupValue::Text("12.3 km".to_owned()));
    assert_eq!(popup.rows[2].value, PopupValue::Text("0.46 km".to_owned()));
    assert_eq!(popup.rows[3].value, PopupValue::Link("https://baeckerei.example".to_owned()));
}

#[test]
fn popup_skips_absent_and_blank_fields() {
    let popup = PopupContent::for_poi(&bare_poi());
    assert_eq!(popup.title, "Bäckerei Schmidt");
    assert!(popup.rows.is_empty());
}

#[test]
fn format_km_rounds_to_precision() {
    assert_eq!(format_km(0.0, 1), "0.0");
    assert_eq!(format_km(3.14159, 2), "3.14");
}
