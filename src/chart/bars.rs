//! Grouped correctness bars: one group per class, one slot per classifier.
//!
//! Grey bars count records the classifier got right for the class; the black
//! overlay counts records every classifier got right. A translucent frame
//! spans each group up to the class total, red for the highlight class and
//! blue otherwise.

use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::analysis::{EdgeColor, aggregate_counts, count_with_label, edge_for};
use crate::chart::style::{self, ChartError};
use crate::dataset::Record;

const GROUP_SPACING: f64 = 2.0;
const SLOT_SPACING: f64 = 0.4;
const BAR_HALF_WIDTH: f64 = 0.15;
const FRAME_HALF_WIDTH: f64 = 0.5;
const FRAME_HEADROOM: f64 = 10.0;

/// Render the grouped bar chart to a PNG at `path`.
pub fn render_bars(
    records: &[Record],
    classifier_ids: &[String],
    labels: &[String],
    highlight_label: &str,
    path: &Path,
    size: (u32, u32),
) -> Result<(), ChartError> {
    let report = aggregate_counts(records, classifier_ids, labels);
    let totals: Vec<u32> = labels
        .iter()
        .map(|label| count_with_label(records, label) as u32)
        .collect();

    let y_max = totals
        .iter()
        .map(|&total| total as f64 + FRAME_HEADROOM)
        .fold(FRAME_HEADROOM, f64::max);
    let x_max = GROUP_SPACING * labels.len().max(1) as f64;

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|err| ChartError::Render(err.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Classifier performance per class",
            ("sans-serif", 28).into_font(),
        )
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(48)
        .build_cartesian_2d(0.0..x_max, -0.14 * y_max..y_max)
        .map_err(|err| ChartError::Render(err.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc("Count")
        .draw()
        .map_err(|err| ChartError::Render(err.to_string()))?;

    let mut frames = Vec::new();
    let mut grey_bars = Vec::new();
    let mut black_bars = Vec::new();
    let mut captions = Vec::new();

    let slot_font = TextStyle::from(("sans-serif", 14).into_font())
        .pos(Pos::new(HPos::Center, VPos::Top));
    let group_font = TextStyle::from(("sans-serif", 16).into_font())
        .pos(Pos::new(HPos::Center, VPos::Top));

    for (group_idx, label) in labels.iter().enumerate() {
        let center = group_center(group_idx);
        let frame_color = match edge_for(label, highlight_label) {
            EdgeColor::Red => style::EDGE_RED,
            EdgeColor::Blue => style::EDGE_BLUE,
        };
        let frame_top = totals[group_idx] as f64 + FRAME_HEADROOM;
        frames.push(Rectangle::new(
            [
                (center - FRAME_HALF_WIDTH, 0.0),
                (center + FRAME_HALF_WIDTH, frame_top),
            ],
            frame_color.mix(0.1).filled(),
        ));
        frames.push(Rectangle::new(
            [
                (center - FRAME_HALF_WIDTH, 0.0),
                (center + FRAME_HALF_WIDTH, frame_top),
            ],
            frame_color.stroke_width(2),
        ));
        captions.push(Text::new(
            label.clone(),
            (center, -0.07 * y_max),
            group_font.clone(),
        ));

        let all_correct = report.all_correct(label) as f64;
        for (slot_idx, classifier) in classifier_ids.iter().enumerate() {
            let x = slot_center(group_idx, slot_idx, classifier_ids.len());
            let adjusted = report.adjusted(label, classifier)? as f64;
            black_bars.push(Rectangle::new(
                [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, all_correct)],
                style::MARKER_BLACK.filled(),
            ));
            grey_bars.push(Rectangle::new(
                [
                    (x - BAR_HALF_WIDTH, all_correct),
                    (x + BAR_HALF_WIDTH, all_correct + adjusted),
                ],
                style::MARKER_GREY.filled(),
            ));
            captions.push(Text::new(
                classifier.clone(),
                (x, -0.02 * y_max),
                slot_font.clone(),
            ));
        }
    }

    chart
        .draw_series(frames)
        .map_err(|err| ChartError::Render(err.to_string()))?;
    chart
        .draw_series(grey_bars)
        .map_err(|err| ChartError::Render(err.to_string()))?;
    chart
        .draw_series(black_bars)
        .map_err(|err| ChartError::Render(err.to_string()))?;
    chart
        .draw_series(captions)
        .map_err(|err| ChartError::Render(err.to_string()))?;

    root.present()
        .map_err(|err| ChartError::Render(err.to_string()))?;
    Ok(())
}

/// Center x position of a class group.
pub(crate) fn group_center(group_idx: usize) -> f64 {
    1.0 + GROUP_SPACING * group_idx as f64
}

/// Center x position of one classifier's bar slot within a group.
pub(crate) fn slot_center(group_idx: usize, slot_idx: usize, slot_count: usize) -> f64 {
    let offset = slot_idx as f64 - (slot_count.saturating_sub(1)) as f64 / 2.0;
    group_center(group_idx) + offset * SLOT_SPACING
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    fn record(label: &str, a: &str, b: &str) -> Record {
        let mut predictions = BTreeMap::new();
        predictions.insert("A".to_string(), a.to_string());
        predictions.insert("B".to_string(), b.to_string());
        Record {
            label: label.to_string(),
            x: 0.0,
            y: 0.0,
            predictions,
        }
    }

    #[test]
    fn two_classifier_slots_land_on_the_original_layout() {
        // Two groups of two slots: 0.8/1.2 and 2.8/3.2.
        let expected = [
            (0, 0, 0.8),
            (0, 1, 1.2),
            (1, 0, 2.8),
            (1, 1, 3.2),
        ];
        for (group, slot, x) in expected {
            assert!((slot_center(group, slot, 2) - x).abs() < 1e-9);
        }
    }

    #[test]
    fn odd_slot_counts_stay_centered_on_the_group() {
        assert_eq!(slot_center(0, 1, 3), group_center(0));
        let spread = slot_center(0, 2, 3) - slot_center(0, 0, 3);
        assert!((spread - 2.0 * SLOT_SPACING).abs() < 1e-9);
    }

    #[test]
    fn renders_a_png_for_the_two_class_dataset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bars.png");
        let records = vec![
            record("dog", "dog", "dog"),
            record("dog", "dog", "cat"),
            record("cat", "cat", "dog"),
            record("cat", "dog", "cat"),
        ];
        let ids = vec!["A".to_string(), "B".to_string()];
        let labels = vec!["dog".to_string(), "cat".to_string()];
        render_bars(&records, &ids, &labels, "dog", &path, (480, 360)).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn renders_even_with_no_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bars_empty.png");
        let labels = vec!["dog".to_string(), "cat".to_string()];
        render_bars(&[], &["A".to_string()], &labels, "dog", &path, (320, 240)).unwrap();
        assert!(path.is_file());
    }
}
