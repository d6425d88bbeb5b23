//! TOML configuration: where the dataset lives and how it is displayed.
//!
//! The config file is optional; every field has a default matching the
//! original two-classifier dog/cat dataset, so a fresh install works with no
//! file on disk at all.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs::{self, AppDirError};

/// Filename of the app configuration inside the application root.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The application directory could not be resolved or created.
    #[error(transparent)]
    Dirs(#[from] AppDirError),
    /// The config file exists but could not be read.
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file exists but is not valid TOML for this schema.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetSettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

/// Where the dataset CSV lives and which columns to read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSettings {
    /// File name searched for under the search root.
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Directory to search; home directory when unset.
    #[serde(default)]
    pub search_root: Option<PathBuf>,
    /// Column holding the ground-truth label.
    #[serde(default = "default_label_column")]
    pub label_column: String,
    /// Column holding the projection x coordinate.
    #[serde(default = "default_x_column")]
    pub x_column: String,
    /// Column holding the projection y coordinate.
    #[serde(default = "default_y_column")]
    pub y_column: String,
    /// Classifier ids and the columns holding their predictions.
    #[serde(default = "default_classifiers")]
    pub classifiers: Vec<ClassifierColumn>,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            search_root: None,
            label_column: default_label_column(),
            x_column: default_x_column(),
            y_column: default_y_column(),
            classifiers: default_classifiers(),
        }
    }
}

impl DatasetSettings {
    /// Classifier ids in configured order.
    pub fn classifier_ids(&self) -> Vec<String> {
        self.classifiers
            .iter()
            .map(|classifier| classifier.id.clone())
            .collect()
    }
}

/// One classifier's id and prediction column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierColumn {
    pub id: String,
    pub column: String,
}

/// Display preferences for both the static charts and the interactive view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Label drawn with a red outline and a red class frame; all other
    /// labels get blue.
    #[serde(default = "default_highlight_label")]
    pub highlight_label: String,
    /// Pinned label display order; first-seen data order when unset.
    #[serde(default)]
    pub label_order: Option<Vec<String>>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            highlight_label: default_highlight_label(),
            label_order: None,
        }
    }
}

/// Path of the config file inside the application root.
pub fn config_path() -> Result<PathBuf, AppDirError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the configuration, falling back to defaults when no file exists.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    if !path.is_file() {
        return Ok(AppConfig::default());
    }
    let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })
}

fn default_file_name() -> String {
    "Synthetic_2_classifiers.csv".to_string()
}

fn default_label_column() -> String {
    "label".to_string()
}

fn default_x_column() -> String {
    "x".to_string()
}

fn default_y_column() -> String {
    "y".to_string()
}

fn default_classifiers() -> Vec<ClassifierColumn> {
    vec![
        ClassifierColumn {
            id: "A".to_string(),
            column: "classifierA_predicted_label".to_string(),
        },
        ClassifierColumn {
            id: "B".to_string(),
            column: "classifierB_predicted_label".to_string(),
        },
    ]
}

fn default_highlight_label() -> String {
    "dog".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_two_classifier_dataset() {
        let config = AppConfig::default();
        assert_eq!(config.dataset.file_name, "Synthetic_2_classifiers.csv");
        assert_eq!(config.dataset.label_column, "label");
        assert_eq!(config.dataset.classifier_ids(), vec!["A", "B"]);
        assert_eq!(
            config.dataset.classifiers[1].column,
            "classifierB_predicted_label"
        );
        assert_eq!(config.display.highlight_label, "dog");
        assert!(config.display.label_order.is_none());
    }

    #[test]
    fn partial_toml_fills_missing_fields_with_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [display]
            highlight_label = "cat"
            label_order = ["cat", "dog"]
            "#,
        )
        .unwrap();
        assert_eq!(config.display.highlight_label, "cat");
        assert_eq!(
            config.display.label_order,
            Some(vec!["cat".to_string(), "dog".to_string()])
        );
        assert_eq!(config.dataset.file_name, "Synthetic_2_classifiers.csv");
    }

    #[test]
    fn classifier_list_is_overridable() {
        let config: AppConfig = toml::from_str(
            r#"
            [dataset]
            file_name = "triple.csv"
            classifiers = [
                { id = "A", column = "a_pred" },
                { id = "B", column = "b_pred" },
                { id = "C", column = "c_pred" },
            ]
            "#,
        )
        .unwrap();
        assert_eq!(config.dataset.classifier_ids(), vec!["A", "B", "C"]);
        assert_eq!(config.dataset.classifiers[2].column, "c_pred");
    }
}
