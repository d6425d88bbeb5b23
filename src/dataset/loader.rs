//! CSV loader for classifier prediction exports.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::DatasetSettings;

use super::Record;

/// Errors that can occur while reading the prediction CSV.
#[derive(Debug, Error)]
pub enum DatasetLoadError {
    /// The file could not be opened or read as CSV.
    #[error("failed to read {path}: {source}")]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },
    /// A required column is absent from the header row.
    #[error("missing required column `{0}`")]
    MissingColumn(String),
    /// A coordinate cell did not parse as a finite number.
    #[error("row {row}: column `{column}` holds `{value}`, expected a finite number")]
    InvalidCoordinate {
        row: usize,
        column: String,
        value: String,
    },
}

/// Load every record from `path` using the column layout in `settings`.
///
/// A file containing only the header row loads as an empty record set;
/// callers treat that as "no data", not as a failure.
pub fn load_records(
    path: &Path,
    settings: &DatasetSettings,
) -> Result<Vec<Record>, DatasetLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| DatasetLoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = reader
        .headers()
        .map_err(|source| DatasetLoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    let column = |name: &str| -> Result<usize, DatasetLoadError> {
        headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| DatasetLoadError::MissingColumn(name.to_string()))
    };

    let label_idx = column(&settings.label_column)?;
    let x_idx = column(&settings.x_column)?;
    let y_idx = column(&settings.y_column)?;
    let mut prediction_idx = Vec::with_capacity(settings.classifiers.len());
    for classifier in &settings.classifiers {
        prediction_idx.push((classifier.id.clone(), column(&classifier.column)?));
    }

    let mut records = Vec::new();
    for (row_number, row) in reader.records().enumerate() {
        let row = row.map_err(|source| DatasetLoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let x = parse_coordinate(&row, x_idx, &settings.x_column, row_number)?;
        let y = parse_coordinate(&row, y_idx, &settings.y_column, row_number)?;
        let mut predictions = BTreeMap::new();
        for (id, idx) in &prediction_idx {
            predictions.insert(id.clone(), cell(&row, *idx).to_string());
        }
        records.push(Record {
            label: cell(&row, label_idx).to_string(),
            x,
            y,
            predictions,
        });
    }
    Ok(records)
}

fn cell<'a>(row: &'a csv::StringRecord, idx: usize) -> &'a str {
    row.get(idx).unwrap_or("")
}

fn parse_coordinate(
    row: &csv::StringRecord,
    idx: usize,
    column: &str,
    row_number: usize,
) -> Result<f32, DatasetLoadError> {
    let raw = cell(row, idx);
    let value = raw.parse::<f32>().ok().filter(|value| value.is_finite());
    value.ok_or_else(|| DatasetLoadError::InvalidCoordinate {
        row: row_number,
        column: column.to_string(),
        value: raw.to_string(),
    })
}
