//! Per-record agreement classification and its display mappings.
//!
//! Labels and predictions are opaque tokens compared by equality; the
//! analyzer never assumes an ordering or a closed label domain.

use crate::dataset::Record;

/// How the classifiers' predictions relate to a record's ground truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Agreement {
    /// Every classifier predicted the ground-truth label.
    AllCorrect,
    /// At least one classifier was right and at least one was wrong.
    SomeCorrect,
    /// No classifier predicted the ground-truth label.
    NoneCorrect,
}

/// Marker fill color for a point, fixed per agreement category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillColor {
    Black,
    Grey,
    White,
}

impl FillColor {
    /// Lowercase color name as used in chart legends and logs.
    pub fn name(self) -> &'static str {
        match self {
            FillColor::Black => "black",
            FillColor::Grey => "grey",
            FillColor::White => "white",
        }
    }
}

/// Marker outline color, derived from the ground-truth label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeColor {
    Red,
    Blue,
}

impl EdgeColor {
    /// Lowercase color name as used in chart legends and logs.
    pub fn name(self) -> &'static str {
        match self {
            EdgeColor::Red => "red",
            EdgeColor::Blue => "blue",
        }
    }
}

/// Everything the rendering layers need to draw one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointStyle {
    pub agreement: Agreement,
    pub fill: FillColor,
    pub edge: EdgeColor,
}

/// Classify one record against the requested classifiers.
///
/// A classifier id with no prediction on the record counts as a miss. An
/// empty classifier list yields `NoneCorrect`: with nobody asked, nobody was
/// right.
pub fn classify(record: &Record, classifier_ids: &[String]) -> Agreement {
    let total = classifier_ids.len();
    let matches = classifier_ids
        .iter()
        .filter(|id| record.prediction(id) == Some(record.label.as_str()))
        .count();
    if total > 0 && matches == total {
        Agreement::AllCorrect
    } else if matches > 0 {
        Agreement::SomeCorrect
    } else {
        Agreement::NoneCorrect
    }
}

/// Fill color for an agreement category.
pub fn fill_for(agreement: Agreement) -> FillColor {
    match agreement {
        Agreement::AllCorrect => FillColor::Black,
        Agreement::SomeCorrect => FillColor::Grey,
        Agreement::NoneCorrect => FillColor::White,
    }
}

/// Outline color for a ground-truth label.
///
/// The configured highlight label gets red, everything else blue. With more
/// than two classes every non-highlight class shares blue; that is a known
/// simplification of the two-class origin of this mapping, kept on purpose.
pub fn edge_for(label: &str, highlight_label: &str) -> EdgeColor {
    if label == highlight_label {
        EdgeColor::Red
    } else {
        EdgeColor::Blue
    }
}

/// Compute the full display triple for one record.
pub fn point_style(
    record: &Record,
    classifier_ids: &[String],
    highlight_label: &str,
) -> PointStyle {
    let agreement = classify(record, classifier_ids);
    PointStyle {
        agreement,
        fill: fill_for(agreement),
        edge: edge_for(&record.label, highlight_label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

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

    fn ids() -> Vec<String> {
        vec!["A".to_string(), "B".to_string()]
    }

    #[test]
    fn both_correct_is_all_correct() {
        assert_eq!(classify(&record("dog", "dog", "dog"), &ids()), Agreement::AllCorrect);
    }

    #[test]
    fn exactly_one_correct_is_some_correct() {
        assert_eq!(classify(&record("dog", "dog", "cat"), &ids()), Agreement::SomeCorrect);
        assert_eq!(classify(&record("dog", "cat", "dog"), &ids()), Agreement::SomeCorrect);
    }

    #[test]
    fn neither_correct_is_none_correct() {
        assert_eq!(classify(&record("dog", "cat", "cat"), &ids()), Agreement::NoneCorrect);
    }

    #[test]
    fn unknown_classifier_counts_as_miss() {
        let ids = vec!["A".to_string(), "C".to_string()];
        assert_eq!(classify(&record("dog", "dog", "dog"), &ids), Agreement::SomeCorrect);
    }

    #[test]
    fn empty_classifier_list_is_none_correct() {
        assert_eq!(classify(&record("dog", "dog", "dog"), &[]), Agreement::NoneCorrect);
    }

    #[test]
    fn fill_mapping_is_fixed() {
        assert_eq!(fill_for(Agreement::AllCorrect), FillColor::Black);
        assert_eq!(fill_for(Agreement::SomeCorrect), FillColor::Grey);
        assert_eq!(fill_for(Agreement::NoneCorrect), FillColor::White);
    }

    #[test]
    fn edge_mapping_highlights_one_label() {
        assert_eq!(edge_for("dog", "dog"), EdgeColor::Red);
        assert_eq!(edge_for("cat", "dog"), EdgeColor::Blue);
        assert_eq!(edge_for("bird", "dog"), EdgeColor::Blue);
    }

    #[test]
    fn point_style_combines_both_mappings() {
        let style = point_style(&record("dog", "dog", "cat"), &ids(), "dog");
        assert_eq!(style.agreement, Agreement::SomeCorrect);
        assert_eq!(style.fill, FillColor::Grey);
        assert_eq!(style.edge, EdgeColor::Red);
    }
}
