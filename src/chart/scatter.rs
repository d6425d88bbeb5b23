//! Scatter plot of the projected data space.
//!
//! Each record is one filled circle: fill encodes the agreement category,
//! outline encodes the ground-truth class.

use std::path::Path;

use plotters::prelude::*;

use crate::analysis::point_style;
use crate::chart::style::{self, ChartError};
use crate::dataset::Record;

const MARKER_RADIUS: i32 = 5;

/// Render the scatter plot to a PNG at `path`.
pub fn render_scatter(
    records: &[Record],
    classifier_ids: &[String],
    highlight_label: &str,
    path: &Path,
    size: (u32, u32),
) -> Result<(), ChartError> {
    let (x_range, y_range) = padded_bounds(records);
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|err| ChartError::Render(err.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Projected Data Space", ("sans-serif", 28).into_font())
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(48)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)
        .map_err(|err| ChartError::Render(err.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .draw()
        .map_err(|err| ChartError::Render(err.to_string()))?;

    // Fill pass first, outline pass second, so every marker keeps a visible
    // class edge even where points overlap.
    chart
        .draw_series(records.iter().map(|record| {
            let style = point_style(record, classifier_ids, highlight_label);
            Circle::new(
                (record.x as f64, record.y as f64),
                MARKER_RADIUS,
                style::fill_rgb(style.fill).filled(),
            )
        }))
        .map_err(|err| ChartError::Render(err.to_string()))?;
    chart
        .draw_series(records.iter().map(|record| {
            let style = point_style(record, classifier_ids, highlight_label);
            Circle::new(
                (record.x as f64, record.y as f64),
                MARKER_RADIUS,
                style::edge_rgb(style.edge).stroke_width(1),
            )
        }))
        .map_err(|err| ChartError::Render(err.to_string()))?;

    root.present()
        .map_err(|err| ChartError::Render(err.to_string()))?;
    Ok(())
}

/// Data bounds with a 5% margin on each side, as `((x0, x1), (y0, y1))`.
///
/// Degenerate spans (no records, or all points on one line) widen to a unit
/// range so the chart axes stay valid.
fn padded_bounds(records: &[Record]) -> ((f64, f64), (f64, f64)) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for record in records {
        x_min = x_min.min(record.x as f64);
        x_max = x_max.max(record.x as f64);
        y_min = y_min.min(record.y as f64);
        y_max = y_max.max(record.y as f64);
    }
    (pad_span(x_min, x_max), pad_span(y_min, y_max))
}

fn pad_span(min: f64, max: f64) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() || min == max {
        let center = if min.is_finite() { min } else { 0.0 };
        return (center - 0.5, center + 0.5);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}
