//! Scatter canvas: point rendering, pan/zoom, and box selection.

use eframe::egui::{self, StrokeKind};

use super::style;
use super::{ViewerApp, state};
use crate::analysis::point_style;

const POINT_RADIUS: f32 = 4.0;
const SELECTED_POINT_RADIUS: f32 = 5.5;

impl ViewerApp {
    pub(super) fn render_map_panel(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, palette.canvas);
        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(1.0, palette.canvas_outline),
            StrokeKind::Inside,
        );

        let Some(bounds) = self.bounds else {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "No records loaded",
                egui::TextStyle::Body.resolve(ui.style()),
                palette.text_muted,
            );
            return;
        };

        self.handle_zoom(ui, &response);
        let pointer = response.interact_pointer_pos();
        self.handle_pan(&response, pointer);

        let center = bounds.center();
        let scale = state::map_scale(rect, &bounds, self.map.zoom.0);
        self.handle_box_select(&response, pointer, rect, center, scale);

        for (idx, record) in self.records.iter().enumerate() {
            let pos = state::map_to_screen(record.x, record.y, rect, center, scale, self.map.pan);
            if !rect.contains(pos) {
                continue;
            }
            let style = point_style(record, &self.classifier_ids, &self.highlight_label);
            let selected = self.map.selected.binary_search(&idx).is_ok();
            let radius = if selected {
                SELECTED_POINT_RADIUS
            } else {
                POINT_RADIUS
            };
            painter.circle_filled(pos, radius, style::fill_color(style.fill));
            painter.circle_stroke(
                pos,
                radius,
                egui::Stroke::new(1.5, style::edge_color(style.edge)),
            );
        }

        if let Some(selection) = self.map.box_select.rect() {
            let a = state::map_to_screen(
                selection.min_x(),
                selection.min_y(),
                rect,
                center,
                scale,
                self.map.pan,
            );
            let b = state::map_to_screen(
                selection.max_x(),
                selection.max_y(),
                rect,
                center,
                scale,
                self.map.pan,
            );
            let overlay = egui::Rect::from_two_pos(a, b);
            painter.rect_filled(overlay, 0.0, palette.selection_fill);
            painter.rect_stroke(
                overlay,
                0.0,
                egui::Stroke::new(1.0, palette.selection_outline),
                StrokeKind::Inside,
            );
        }
    }

    fn handle_zoom(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let scroll_delta = ui.input(|input| input.smooth_scroll_delta.y);
        if response.hovered() && scroll_delta.abs() > 0.0 {
            let zoom_delta = 1.0 + scroll_delta * state::ZOOM_SPEED;
            self.map.zoom.0 =
                (self.map.zoom.0 * zoom_delta).clamp(state::ZOOM_MIN, state::ZOOM_MAX);
        }
    }

    fn handle_pan(&mut self, response: &egui::Response, pointer: Option<egui::Pos2>) {
        if response.dragged_by(egui::PointerButton::Secondary) {
            if let Some(pos) = pointer {
                let last = self.map.last_drag_pos.unwrap_or(pos);
                self.map.pan += pos - last;
                self.map.last_drag_pos = Some(pos);
            }
        } else {
            self.map.last_drag_pos = None;
        }
    }

    fn handle_box_select(
        &mut self,
        response: &egui::Response,
        pointer: Option<egui::Pos2>,
        rect: egui::Rect,
        center: (f32, f32),
        scale: f32,
    ) {
        let data_pos = pointer
            .map(|pos| state::screen_to_map(pos, rect, center, scale, self.map.pan));
        if response.drag_started_by(egui::PointerButton::Primary) {
            if let Some(pos) = data_pos {
                self.map.box_select.begin(pos);
            }
        } else if response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pos) = data_pos {
                if let Some(rect) = self.map.box_select.update(pos) {
                    // Recompute live while dragging so the bars track the
                    // rectangle, not just its final shape.
                    self.apply_selection(Some(rect));
                }
            }
        } else if response.drag_stopped_by(egui::PointerButton::Primary) {
            let finished = self.map.box_select.finish();
            self.apply_selection(finished);
        }
    }
}
