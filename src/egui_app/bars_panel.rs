//! Bar panel: per-class correctness counts for the current selection.
//!
//! Shares the slot geometry with the static bar chart so both views read the
//! same way; the class frames are sized from the full dataset while the bars
//! track the selection.

use eframe::egui::{self, StrokeKind};

use super::style;
use super::ViewerApp;
use crate::analysis::{CountsError, edge_for};
use crate::chart::bars::{group_center, slot_center};

const FRAME_HEADROOM: f32 = 10.0;
const TOP_PAD: f32 = 28.0;
const BOTTOM_PAD: f32 = 40.0;

/// One bar slot resolved to counts, ready to draw.
struct SlotBar {
    label_idx: usize,
    slot_idx: usize,
    classifier: String,
    all_correct: u32,
    adjusted: u32,
}

impl ViewerApp {
    pub(super) fn render_bars_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Classifier performance");
        ui.label(format!(
            "{} of {} records selected",
            self.map.selected.len(),
            self.records.len()
        ));
        if ui.button("Clear selection").clicked() && self.map.box_select.clear() {
            self.apply_selection(None);
        }
        ui.separator();

        let slots = match self.resolve_slots() {
            Ok(slots) => slots,
            Err(err) => {
                ui.colored_label(ui.visuals().error_fg_color, err.to_string());
                return;
            }
        };

        let palette = style::palette();
        let (rect, _) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, palette.canvas);
        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(1.0, palette.canvas_outline),
            StrokeKind::Inside,
        );
        if self.labels.is_empty() {
            return;
        }

        let y_max = self
            .label_totals
            .iter()
            .map(|&total| total as f32 + FRAME_HEADROOM)
            .fold(FRAME_HEADROOM, f32::max);
        let baseline = rect.bottom() - BOTTOM_PAD;
        let px_per_count = (rect.height() - TOP_PAD - BOTTOM_PAD).max(1.0) / y_max;
        let x_span = 2.0 * self.labels.len() as f32;
        let to_px = |x: f64| rect.left() + (x as f32 / x_span) * rect.width();
        let slot_width = rect.width() / x_span * 0.3;

        let small_font = egui::TextStyle::Small.resolve(ui.style());
        let body_font = egui::TextStyle::Body.resolve(ui.style());

        for (label_idx, label) in self.labels.iter().enumerate() {
            let edge = edge_for(label, &self.highlight_label);
            let center_px = to_px(group_center(label_idx));
            let half_width = rect.width() / x_span * 0.5;
            let top = baseline - (self.label_totals[label_idx] as f32 + FRAME_HEADROOM)
                * px_per_count;
            let frame = egui::Rect::from_min_max(
                egui::pos2(center_px - half_width, top),
                egui::pos2(center_px + half_width, baseline),
            );
            painter.rect_filled(frame, 0.0, style::frame_fill(edge));
            painter.rect_stroke(
                frame,
                0.0,
                egui::Stroke::new(2.0, style::edge_color(edge)),
                StrokeKind::Inside,
            );
            painter.text(
                egui::pos2(center_px, baseline + 20.0),
                egui::Align2::CENTER_TOP,
                label,
                body_font.clone(),
                style::edge_color(edge),
            );
        }

        for slot in &slots {
            let x = to_px(slot_center(slot.label_idx, slot.slot_idx, self.classifier_ids.len()));
            let black_top = baseline - slot.all_correct as f32 * px_per_count;
            let grey_top = black_top - slot.adjusted as f32 * px_per_count;
            let half = slot_width * 0.5;
            if slot.all_correct > 0 {
                painter.rect_filled(
                    egui::Rect::from_min_max(
                        egui::pos2(x - half, black_top),
                        egui::pos2(x + half, baseline),
                    ),
                    0.0,
                    egui::Color32::from_rgb(10, 10, 10),
                );
            }
            if slot.adjusted > 0 {
                painter.rect_filled(
                    egui::Rect::from_min_max(
                        egui::pos2(x - half, grey_top),
                        egui::pos2(x + half, black_top),
                    ),
                    0.0,
                    egui::Color32::from_rgb(128, 128, 128),
                );
            }
            let total = slot.all_correct + slot.adjusted;
            if total > 0 {
                painter.text(
                    egui::pos2(x, grey_top - 2.0),
                    egui::Align2::CENTER_BOTTOM,
                    total.to_string(),
                    small_font.clone(),
                    palette.text_muted,
                );
            }
            painter.text(
                egui::pos2(x, baseline + 4.0),
                egui::Align2::CENTER_TOP,
                &slot.classifier,
                small_font.clone(),
                palette.text_muted,
            );
        }
    }

    /// Resolve the current report into drawable slots, surfacing any
    /// count inconsistency instead of drawing through it.
    fn resolve_slots(&self) -> Result<Vec<SlotBar>, CountsError> {
        let mut slots = Vec::with_capacity(self.labels.len() * self.classifier_ids.len());
        for (label_idx, label) in self.labels.iter().enumerate() {
            for (slot_idx, classifier) in self.classifier_ids.iter().enumerate() {
                slots.push(SlotBar {
                    label_idx,
                    slot_idx,
                    classifier: classifier.clone(),
                    all_correct: self.report.all_correct(label),
                    adjusted: self.report.adjusted(label, classifier)?,
                });
            }
        }
        Ok(slots)
    }
}
