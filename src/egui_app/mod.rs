//! Interactive linked view: projected scatter with box selection on the
//! left, per-class correctness bars for the current selection on the right.

mod bars_panel;
mod map_view;
/// View state and data-space/screen transforms.
pub mod state;
/// Palette and egui color mappings.
pub mod style;

use eframe::egui;
use tracing::info;

use crate::analysis::{AgreementCounts, aggregate_counts, count_with_label};
use crate::config::AppConfig;
use crate::dataset::{self, Record, discover};
use crate::selection::{SelectionRect, indices_within};
use state::{DataBounds, MapState};

/// Minimum viewport size for the main window.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(760.0, 420.0);

/// Top-level egui application.
pub struct ViewerApp {
    records: Vec<Record>,
    classifier_ids: Vec<String>,
    labels: Vec<String>,
    highlight_label: String,
    /// Full-dataset record count per label; frames the bar panel even while
    /// the selection is empty, matching the static chart.
    label_totals: Vec<u32>,
    bounds: Option<DataBounds>,
    map: MapState,
    /// Counts over the current selection only.
    report: AgreementCounts,
}

impl ViewerApp {
    /// Discover and load the dataset, then build the initial view state.
    pub fn from_config(config: AppConfig) -> Result<Self, String> {
        let search_root = config
            .dataset
            .search_root
            .clone()
            .or_else(discover::default_search_root)
            .ok_or_else(|| "no home directory available to search for the dataset".to_string())?;
        let path = discover::find_dataset(&search_root, &config.dataset.file_name)
            .ok_or_else(|| {
                format!(
                    "dataset file `{}` not found under {}",
                    config.dataset.file_name,
                    search_root.display()
                )
            })?;
        info!("dataset found at {}", path.display());

        let records =
            dataset::load_records(&path, &config.dataset).map_err(|err| err.to_string())?;
        info!(records = records.len(), "dataset loaded");
        Ok(Self::from_records(records, &config))
    }

    /// Build the view state for an already-loaded record set.
    pub fn from_records(records: Vec<Record>, config: &AppConfig) -> Self {
        let classifier_ids = config.dataset.classifier_ids();
        let labels = config
            .display
            .label_order
            .clone()
            .unwrap_or_else(|| dataset::distinct_labels(&records));
        let label_totals = labels
            .iter()
            .map(|label| count_with_label(&records, label) as u32)
            .collect();
        let bounds = DataBounds::from_records(&records);
        // The bar panel starts from zero counts until something is selected.
        let report = AgreementCounts::zeroed(&labels, &classifier_ids);
        Self {
            records,
            classifier_ids,
            labels,
            highlight_label: config.display.highlight_label.clone(),
            label_totals,
            bounds,
            map: MapState::default(),
            report,
        }
    }

    /// Re-resolve the selected indices and recompute the count report.
    ///
    /// This is the selection-change handler: it runs on every rectangle
    /// update and holds no state between calls beyond the cached result.
    fn apply_selection(&mut self, rect: Option<SelectionRect>) {
        self.map.selected = rect
            .map(|rect| indices_within(&self.records, &rect))
            .unwrap_or_default();
        self.report = aggregate_counts(
            self.map.selected.iter().map(|&idx| &self.records[idx]),
            &self.classifier_ids,
            &self.labels,
        );
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|input| input.key_pressed(egui::Key::Escape)) && self.map.box_select.clear()
        {
            self.apply_selection(None);
        }

        egui::SidePanel::right("performance_panel")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                self.render_bars_panel(ui);
            });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_map_panel(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record(label: &str, x: f32, y: f32, a: &str, b: &str) -> Record {
        let mut predictions = BTreeMap::new();
        predictions.insert("A".to_string(), a.to_string());
        predictions.insert("B".to_string(), b.to_string());
        Record {
            label: label.to_string(),
            x,
            y,
            predictions,
        }
    }

    fn app() -> ViewerApp {
        let records = vec![
            record("dog", 0.0, 0.0, "dog", "dog"),
            record("dog", 1.0, 1.0, "dog", "cat"),
            record("cat", 5.0, 5.0, "cat", "cat"),
        ];
        ViewerApp::from_records(records, &AppConfig::default())
    }

    #[test]
    fn labels_fall_back_to_first_seen_order() {
        let app = app();
        assert_eq!(app.labels, vec!["dog", "cat"]);
        assert_eq!(app.label_totals, vec![2, 1]);
    }

    #[test]
    fn initial_report_is_all_zeros() {
        let app = app();
        assert_eq!(app.report.correct("dog", "A"), 0);
        assert_eq!(app.report.all_correct("dog"), 0);
    }

    #[test]
    fn selection_drives_the_report() {
        let mut app = app();
        let rect = SelectionRect::from_corners((-0.5, -0.5), (1.5, 1.5));
        app.apply_selection(Some(rect));
        assert_eq!(app.map.selected, vec![0, 1]);
        assert_eq!(app.report.correct("dog", "A"), 2);
        assert_eq!(app.report.correct("dog", "B"), 1);
        assert_eq!(app.report.all_correct("dog"), 1);
        assert_eq!(app.report.correct("cat", "A"), 0);

        app.apply_selection(None);
        assert!(app.map.selected.is_empty());
        assert_eq!(app.report.correct("dog", "A"), 0);
    }
}
