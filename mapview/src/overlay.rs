//! Overlay avoidance: which floating panels cover the map, and how much
//! padding a viewport fit must keep clear because of them.
//!
//! Each visible panel is anchored to the viewport edge it sits closest to.
//! Per edge only the widest (left/right) or tallest (top/bottom) anchored
//! panel counts; panels sharing an edge are assumed to stack, so their
//! extents are never summed.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use crate::consts::BASE_MARGIN_PX;

/// Screen-space rectangle in CSS pixels, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ScreenRect {
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    #[must_use]
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { left: x, top: y, right: x + width, bottom: y + height }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Window dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Viewport edge a panel is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// Precedence when a panel is equally close to several edges.
    pub const TIE_BREAK_ORDER: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];
}

/// Pixel insets handed to the map engine's fit call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddingBox {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PaddingBox {
    #[must_use]
    pub fn uniform(px: f64) -> Self {
        Self { top: px, left: px, right: px, bottom: px }
    }

    /// Base margin on every side; the floor for any computed padding.
    #[must_use]
    pub fn base() -> Self {
        Self::uniform(BASE_MARGIN_PX)
    }

    /// `[left, top]`, Leaflet's `paddingTopLeft`.
    #[must_use]
    pub fn top_left(&self) -> [f64; 2] {
        [self.left, self.top]
    }

    /// `[right, bottom]`, Leaflet's `paddingBottomRight`.
    #[must_use]
    pub fn bottom_right(&self) -> [f64; 2] {
        [self.right, self.bottom]
    }
}

impl Default for PaddingBox {
    fn default() -> Self {
        Self::base()
    }
}

/// Horizontal pixels covered by panels on each side of the map.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Occupancy {
    pub left: f64,
    pub right: f64,
}

/// Result of a padding computation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaddingReport {
    pub padding: PaddingBox,
    pub occupancy: Occupancy,
}

/// Source of the ambient layout: window size and floating panel rectangles.
///
/// The browser implementation lives in the client; tests substitute
/// [`StaticProbe`].
pub trait ViewportProbe {
    /// Current window size, or `None` when there is no window (server render).
    fn viewport(&self) -> Option<ViewportSize>;

    /// Bounding rectangles of every rendered overlay panel.
    fn overlays(&self) -> Vec<ScreenRect>;
}

/// Fixed probe answering with a predetermined layout.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    pub viewport: Option<ViewportSize>,
    pub overlays: Vec<ScreenRect>,
}

impl StaticProbe {
    #[must_use]
    pub fn new(viewport: ViewportSize, overlays: Vec<ScreenRect>) -> Self {
        Self { viewport: Some(viewport), overlays }
    }

    /// A probe with no window at all.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }
}

impl ViewportProbe for StaticProbe {
    fn viewport(&self) -> Option<ViewportSize> {
        self.viewport
    }

    fn overlays(&self) -> Vec<ScreenRect> {
        self.overlays.clone()
    }
}

/// A panel that is at least partly on screen, with the edge it hugs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchoredPanel {
    pub edge: Edge,
    pub visible_width: f64,
    pub visible_height: f64,
}

impl AnchoredPanel {
    /// Extent the panel takes away from its edge.
    #[must_use]
    pub fn extent(&self) -> f64 {
        match self.edge {
            Edge::Left | Edge::Right => self.visible_width,
            Edge::Top | Edge::Bottom => self.visible_height,
        }
    }
}

/// Clip `rect` to the viewport and anchor it to its nearest edge.
///
/// Returns `None` for panels entirely off screen or with no visible area.
#[must_use]
pub fn anchor_panel(rect: &ScreenRect, viewport: ViewportSize) -> Option<AnchoredPanel> {
    let on_screen =
        rect.right > 0.0 && rect.bottom > 0.0 && rect.left < viewport.width && rect.top < viewport.height;
    if !on_screen {
        return None;
    }

    let inter_w = (rect.right.min(viewport.width) - rect.left.max(0.0)).max(0.0);
    let inter_h = (rect.bottom.min(viewport.height) - rect.top.max(0.0)).max(0.0);
    let visible_width = rect.width().min(inter_w);
    let visible_height = rect.height().min(inter_h);
    if visible_width <= 0.0 || visible_height <= 0.0 {
        return None;
    }

    let distance = |edge: Edge| match edge {
        Edge::Left => rect.left.max(0.0),
        Edge::Right => (viewport.width - rect.right).max(0.0),
        Edge::Top => rect.top.max(0.0),
        Edge::Bottom => (viewport.height - rect.bottom).max(0.0),
    };

    // Strict comparison keeps the earliest edge in tie-break order.
    let mut edge = Edge::TIE_BREAK_ORDER[0];
    let mut best = distance(edge);
    for candidate in &Edge::TIE_BREAK_ORDER[1..] {
        let d = distance(*candidate);
        if d < best {
            best = d;
            edge = *candidate;
        }
    }

    log::trace!("overlay {rect:?} anchored {edge:?} at {best}px");
    Some(AnchoredPanel { edge, visible_width, visible_height })
}

/// Padding that keeps a fit clear of every visible overlay panel.
#[must_use]
pub fn compute_padding(viewport: ViewportSize, overlays: &[ScreenRect]) -> PaddingReport {
    let mut max = PaddingBox::uniform(0.0);
    for panel in overlays.iter().filter_map(|rect| anchor_panel(rect, viewport)) {
        let slot = match panel.edge {
            Edge::Left => &mut max.left,
            Edge::Right => &mut max.right,
            Edge::Top => &mut max.top,
            Edge::Bottom => &mut max.bottom,
        };
        *slot = slot.max(panel.extent());
    }

    PaddingReport {
        padding: PaddingBox {
            top: BASE_MARGIN_PX + max.top,
            left: BASE_MARGIN_PX + max.left,
            right: BASE_MARGIN_PX + max.right,
            bottom: BASE_MARGIN_PX + max.bottom,
        },
        occupancy: Occupancy { left: max.left, right: max.right },
    }
}

/// [`compute_padding`] against whatever layout `probe` reports.
///
/// Without a window the result is the base margin and no occupancy.
#[must_use]
pub fn probe_padding(probe: &dyn ViewportProbe) -> PaddingReport {
    match probe.viewport() {
        Some(viewport) => compute_padding(viewport, &probe.overlays()),
        None => PaddingReport::default(),
    }
}
