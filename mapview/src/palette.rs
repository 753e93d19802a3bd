//! Category to marker color assignment.
//!
//! Distinct non-empty categories get palette colors in first-seen order,
//! wrapping when there are more categories than colors. Anything without a
//! category (or with one the map never saw) is drawn in [`DEFAULT_COLOR`],
//! which the palette never contains.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use crate::poi::MapPoi;

/// Marker image colors available from the icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerColor {
    Red,
    Orange,
    Purple,
    Green,
    Blue,
    LightBlue,
    Gray,
}

impl MarkerColor {
    /// Name used in the marker image file name and CSS classes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::LightBlue => "lightblue",
            Self::Gray => "gray",
        }
    }
}

/// Assignment order for categories.
pub const COLOR_PALETTE: [MarkerColor; 6] = [
    MarkerColor::Red,
    MarkerColor::Orange,
    MarkerColor::Purple,
    MarkerColor::Green,
    MarkerColor::Blue,
    MarkerColor::LightBlue,
];

/// Color for uncategorized markers.
pub const DEFAULT_COLOR: MarkerColor = MarkerColor::Gray;

/// Insertion-ordered category to color table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryColorMap {
    entries: Vec<(String, MarkerColor)>,
}

impl CategoryColorMap {
    /// Build from category labels in display order; blanks are skipped.
    pub fn from_categories<'a, I>(categories: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut entries: Vec<(String, MarkerColor)> = Vec::new();
        for label in categories.into_iter().flatten() {
            if label.is_empty() || entries.iter().any(|(seen, _)| seen == label) {
                continue;
            }
            let color = COLOR_PALETTE[entries.len() % COLOR_PALETTE.len()];
            entries.push((label.to_owned(), color));
        }
        Self { entries }
    }

    #[must_use]
    pub fn from_pois(pois: &[MapPoi]) -> Self {
        Self::from_categories(pois.iter().map(MapPoi::category))
    }

    /// Color for a category; blank or unknown labels get [`DEFAULT_COLOR`].
    #[must_use]
    pub fn color_for(&self, category: Option<&str>) -> MarkerColor {
        category
            .and_then(|label| self.entries.iter().find(|(seen, _)| seen == label))
            .map_or(DEFAULT_COLOR, |(_, color)| *color)
    }

    #[must_use]
    pub fn color_for_poi(&self, poi: &MapPoi) -> MarkerColor {
        self.color_for(poi.category())
    }

    /// `(category, color)` pairs in first-seen order, for the legend.
    pub fn iter(&self) -> impl Iterator<Item = (&str, MarkerColor)> {
        self.entries.iter().map(|(label, color)| (label.as_str(), *color))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
