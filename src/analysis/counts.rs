//! Correctness counts per (label, classifier), recomputed on demand.
//!
//! The same computation serves the static charts (full record set) and the
//! interactive view (current selection); it holds no state between calls.

use thiserror::Error;

use crate::dataset::Record;

/// Count report for a fixed (label values, classifier ids) grid.
///
/// Label and classifier order is the caller's display order and is preserved.
/// `correct` is row-major by label: `correct[label_idx * classifiers.len() + classifier_idx]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgreementCounts {
    pub labels: Vec<String>,
    pub classifiers: Vec<String>,
    pub correct: Vec<u32>,
    pub all_correct: Vec<u32>,
}

/// Errors surfaced by count queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CountsError {
    /// A per-classifier correct count fell below the all-correct count for
    /// its label. That cannot happen when both were computed from the same
    /// records, so it flags mismatched count sources rather than bad data.
    #[error(
        "correct count {correct} for label `{label}`, classifier `{classifier}` \
         is below the all-correct count {all_correct}"
    )]
    InvariantViolation {
        label: String,
        classifier: String,
        correct: u32,
        all_correct: u32,
    },
}

impl AgreementCounts {
    /// An all-zero report for the given grid.
    pub fn zeroed(labels: &[String], classifiers: &[String]) -> Self {
        Self {
            labels: labels.to_vec(),
            classifiers: classifiers.to_vec(),
            correct: vec![0; labels.len() * classifiers.len()],
            all_correct: vec![0; labels.len()],
        }
    }

    /// Records where truth is `label` and `classifier` predicted it.
    /// Unknown labels or classifiers report zero.
    pub fn correct(&self, label: &str, classifier: &str) -> u32 {
        self.cell(label, classifier)
            .map(|idx| self.correct[idx])
            .unwrap_or(0)
    }

    /// Records where truth is `label` and every classifier predicted it.
    /// Unknown labels report zero.
    pub fn all_correct(&self, label: &str) -> u32 {
        self.label_index(label)
            .map(|idx| self.all_correct[idx])
            .unwrap_or(0)
    }

    /// Correct count for the pair minus the label's all-correct count, the
    /// quantity rendered as the exclusive (grey) bar segment.
    ///
    /// Underflow is reported, never clamped: a negative value means the two
    /// counts came from different record sets and hiding that would mask the
    /// bug.
    pub fn adjusted(&self, label: &str, classifier: &str) -> Result<u32, CountsError> {
        let correct = self.correct(label, classifier);
        let all_correct = self.all_correct(label);
        correct
            .checked_sub(all_correct)
            .ok_or_else(|| CountsError::InvariantViolation {
                label: label.to_string(),
                classifier: classifier.to_string(),
                correct,
                all_correct,
            })
    }

    fn label_index(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|candidate| candidate == label)
    }

    fn cell(&self, label: &str, classifier: &str) -> Option<usize> {
        let label_idx = self.label_index(label)?;
        let classifier_idx = self
            .classifiers
            .iter()
            .position(|candidate| candidate == classifier)?;
        Some(label_idx * self.classifiers.len() + classifier_idx)
    }
}

/// Count correctness over any record sequence (full set or a selection).
///
/// Pure and order-insensitive over the records; an empty sequence yields the
/// zero report. With an empty classifier list the all-correct counts stay
/// zero, matching the per-record classifier that calls such records
/// `NoneCorrect`.
pub fn aggregate_counts<'a, I>(
    records: I,
    classifiers: &[String],
    labels: &[String],
) -> AgreementCounts
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut report = AgreementCounts::zeroed(labels, classifiers);
    for record in records {
        let Some(label_idx) = labels.iter().position(|label| label == &record.label) else {
            continue;
        };
        let mut hits = 0usize;
        for (classifier_idx, classifier) in classifiers.iter().enumerate() {
            if record.prediction(classifier) == Some(record.label.as_str()) {
                report.correct[label_idx * classifiers.len() + classifier_idx] += 1;
                hits += 1;
            }
        }
        if !classifiers.is_empty() && hits == classifiers.len() {
            report.all_correct[label_idx] += 1;
        }
    }
    report
}

/// Records whose ground truth equals `label`.
pub fn count_with_label<'a, I>(records: I, label: &str) -> usize
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|record| record.label == label)
        .count()
}
