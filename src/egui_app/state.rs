//! Map view state and the data-space/screen transform helpers.
//!
//! The transforms stay free of UI state so they can be tested directly.

use eframe::egui;

use crate::dataset::Record;
use crate::selection::BoxSelect;

/// Interaction state for the scatter canvas.
#[derive(Debug, Default)]
pub struct MapState {
    /// Wheel zoom factor applied on top of the fit-to-view scale.
    pub zoom: Zoom,
    /// Screen-space pan offset.
    pub pan: egui::Vec2,
    /// Previous pointer position during a pan drag.
    pub last_drag_pos: Option<egui::Pos2>,
    /// Box-selection drag tracker in data coordinates.
    pub box_select: BoxSelect,
    /// Indices of the currently selected records.
    pub selected: Vec<usize>,
}

/// Zoom wrapper so the default is 1.0 rather than 0.0.
#[derive(Debug, Clone, Copy)]
pub struct Zoom(pub f32);

impl Default for Zoom {
    fn default() -> Self {
        Zoom(1.0)
    }
}

pub(crate) const ZOOM_MIN: f32 = 0.2;
pub(crate) const ZOOM_MAX: f32 = 20.0;
pub(crate) const ZOOM_SPEED: f32 = 0.0015;

/// Axis-aligned data bounds of the projected record set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl DataBounds {
    /// Bounds over all records; `None` when there are none.
    pub fn from_records(records: &[Record]) -> Option<Self> {
        let first = records.first()?;
        let mut bounds = DataBounds {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for record in &records[1..] {
            bounds.min_x = bounds.min_x.min(record.x);
            bounds.max_x = bounds.max_x.max(record.x);
            bounds.min_y = bounds.min_y.min(record.y);
            bounds.max_y = bounds.max_y.max(record.y);
        }
        Some(bounds)
    }

    /// Center of the bounds in data coordinates.
    pub fn center(&self) -> (f32, f32) {
        (
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }
}

/// Pixels per data unit that fit the bounds into `rect` at the given zoom.
pub fn map_scale(rect: egui::Rect, bounds: &DataBounds, zoom: f32) -> f32 {
    let span_x = (bounds.max_x - bounds.min_x).max(1e-6);
    let span_y = (bounds.max_y - bounds.min_y).max(1e-6);
    0.9 * (rect.width() / span_x).min(rect.height() / span_y) * zoom
}

/// Project a data-space position into screen space.
///
/// Screen y grows downward, so the data y axis is flipped to keep larger y
/// values visually up, matching the static scatter.
pub fn map_to_screen(
    x: f32,
    y: f32,
    rect: egui::Rect,
    center: (f32, f32),
    scale: f32,
    pan: egui::Vec2,
) -> egui::Pos2 {
    egui::pos2(
        rect.center().x + (x - center.0) * scale + pan.x,
        rect.center().y - (y - center.1) * scale + pan.y,
    )
}

/// Invert [`map_to_screen`] for pointer positions.
pub fn screen_to_map(
    pos: egui::Pos2,
    rect: egui::Rect,
    center: (f32, f32),
    scale: f32,
    pan: egui::Vec2,
) -> (f32, f32) {
    (
        (pos.x - rect.center().x - pan.x) / scale + center.0,
        -(pos.y - rect.center().y - pan.y) / scale + center.1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record_at(x: f32, y: f32) -> Record {
        Record {
            label: "dog".to_string(),
            x,
            y,
            predictions: BTreeMap::new(),
        }
    }

    fn canvas() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(200.0, 100.0))
    }

    #[test]
    fn bounds_cover_all_records() {
        let records = vec![record_at(-1.0, 2.0), record_at(3.0, -4.0)];
        let bounds = DataBounds::from_records(&records).unwrap();
        assert_eq!(bounds.min_x, -1.0);
        assert_eq!(bounds.max_x, 3.0);
        assert_eq!(bounds.min_y, -4.0);
        assert_eq!(bounds.max_y, 2.0);
        assert_eq!(bounds.center(), (1.0, -1.0));
    }

    #[test]
    fn bounds_of_empty_record_set_is_none() {
        assert!(DataBounds::from_records(&[]).is_none());
    }

    #[test]
    fn scale_fits_the_longer_span() {
        let bounds = DataBounds {
            min_x: 0.0,
            max_x: 10.0,
            min_y: 0.0,
            max_y: 10.0,
        };
        // Height is the limiting dimension: 0.9 * 100 / 10.
        let scale = map_scale(canvas(), &bounds, 1.0);
        assert!((scale - 9.0).abs() < 1e-6);
    }

    #[test]
    fn screen_round_trips_back_to_data_space() {
        let bounds = DataBounds {
            min_x: -5.0,
            max_x: 5.0,
            min_y: -5.0,
            max_y: 5.0,
        };
        let rect = canvas();
        let center = bounds.center();
        let scale = map_scale(rect, &bounds, 1.3);
        let pan = egui::vec2(7.0, -3.0);
        let pos = map_to_screen(1.25, -2.5, rect, center, scale, pan);
        let (x, y) = screen_to_map(pos, rect, center, scale, pan);
        assert!((x - 1.25).abs() < 1e-4);
        assert!((y + 2.5).abs() < 1e-4);
    }

    #[test]
    fn larger_data_y_is_higher_on_screen() {
        let bounds = DataBounds {
            min_x: 0.0,
            max_x: 1.0,
            min_y: 0.0,
            max_y: 1.0,
        };
        let rect = canvas();
        let scale = map_scale(rect, &bounds, 1.0);
        let low = map_to_screen(0.5, 0.0, rect, bounds.center(), scale, egui::Vec2::ZERO);
        let high = map_to_screen(0.5, 1.0, rect, bounds.center(), scale, egui::Vec2::ZERO);
        assert!(high.y < low.y);
    }
}
