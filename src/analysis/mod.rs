//! Agreement analysis between classifiers over the loaded record set.

/// Per-record agreement category and display color mappings.
pub mod agreement;
/// Aggregate correctness counts over full or selected record sets.
pub mod counts;

pub use agreement::{
    Agreement, EdgeColor, FillColor, PointStyle, classify, edge_for, fill_for, point_style,
};
pub use counts::{AgreementCounts, CountsError, aggregate_counts, count_with_label};
