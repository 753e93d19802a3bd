//! Shared numeric and styling constants for the map view.

// ── Viewport fitting ────────────────────────────────────────────

/// Minimum inset, in CSS pixels, kept clear on every side when fitting.
pub const BASE_MARGIN_PX: f64 = 24.0;

/// CSS selector matching floating panels that may cover the map.
pub const OVERLAY_SELECTOR: &str = ".sheet";

// ── Initial view ────────────────────────────────────────────────

/// Zoom level used when the map first mounts.
pub const INITIAL_ZOOM: f64 = 10.0;

/// Fallback center (Berlin) when no track is loaded, as `(lon, lat)`.
pub const FALLBACK_CENTER_LON_LAT: (f64, f64) = (13.405, 52.52);

/// Maximum zoom applied when centering on the user's location.
pub const LOCATE_MAX_ZOOM: f64 = 14.0;

// ── Track styling ───────────────────────────────────────────────

/// Stroke color of the track polyline.
pub const TRACK_COLOR: &str = "#2563eb";

/// Stroke width of the track polyline, in pixels.
pub const TRACK_WEIGHT: f64 = 3.0;

// ── Marker chrome ───────────────────────────────────────────────

/// Maximum popup width, in pixels.
pub const POPUP_MAX_WIDTH: f64 = 300.0;

/// Vertical tooltip offset so it clears the marker pin.
pub const TOOLTIP_OFFSET_Y: f64 = -20.0;

/// Tooltip opacity.
pub const TOOLTIP_OPACITY: f64 = 0.95;
