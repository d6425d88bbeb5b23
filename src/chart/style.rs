//! Color mapping from analysis display colors to plotters colors.

use plotters::style::RGBColor;
use thiserror::Error;

use crate::analysis::{EdgeColor, FillColor};

/// Errors that can occur while rendering a chart to disk.
///
/// Plotters errors are generic over the backend, so they are carried as
/// rendered strings rather than source types.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Drawing or writing the output image failed.
    #[error("chart rendering failed: {0}")]
    Render(String),
    /// The record set produced an inconsistent count report.
    #[error(transparent)]
    Counts(#[from] crate::analysis::CountsError),
}

pub(crate) const MARKER_BLACK: RGBColor = RGBColor(0, 0, 0);
pub(crate) const MARKER_GREY: RGBColor = RGBColor(128, 128, 128);
pub(crate) const MARKER_WHITE: RGBColor = RGBColor(255, 255, 255);
pub(crate) const EDGE_RED: RGBColor = RGBColor(220, 40, 40);
pub(crate) const EDGE_BLUE: RGBColor = RGBColor(40, 70, 220);

/// Marker fill as a plotters color.
pub(crate) fn fill_rgb(fill: FillColor) -> RGBColor {
    match fill {
        FillColor::Black => MARKER_BLACK,
        FillColor::Grey => MARKER_GREY,
        FillColor::White => MARKER_WHITE,
    }
}

/// Marker outline as a plotters color.
pub(crate) fn edge_rgb(edge: EdgeColor) -> RGBColor {
    match edge {
        EdgeColor::Red => EDGE_RED,
        EdgeColor::Blue => EDGE_BLUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_colors_follow_the_fixed_mapping() {
        assert_eq!(fill_rgb(FillColor::Black), MARKER_BLACK);
        assert_eq!(fill_rgb(FillColor::Grey), MARKER_GREY);
        assert_eq!(fill_rgb(FillColor::White), MARKER_WHITE);
    }

    #[test]
    fn edge_colors_follow_the_fixed_mapping() {
        assert_eq!(edge_rgb(EdgeColor::Red), EDGE_RED);
        assert_eq!(edge_rgb(EdgeColor::Blue), EDGE_BLUE);
    }
}
