//! Application directory helpers anchored to a single `.agreemap` folder.
//!
//! Config and log files live under the OS config directory by default; the
//! `AGREEMAP_CONFIG_HOME` environment variable overrides the base for tests
//! and portable setups.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;

/// Name of the application directory under the config base.
pub const APP_DIR_NAME: &str = ".agreemap";

/// Errors that can occur while resolving or preparing application directories.
#[derive(Debug, Error)]
pub enum AppDirError {
    /// No suitable base config directory could be resolved.
    #[error("no suitable base config directory available for application files")]
    NoBaseDir,
    /// Failed to create the application directory.
    #[error("failed to create application directory at {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Return the `.agreemap` root, creating it if needed.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    let base = config_base_dir().ok_or(AppDirError::NoBaseDir)?;
    ensure_dir(root_in(&base))
}

/// Return the logs directory inside the `.agreemap` root, creating it if needed.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    let root = app_root_dir()?;
    ensure_dir(root.join("logs"))
}

/// Application root for a given base directory, without touching the disk.
pub fn root_in(base: &Path) -> PathBuf {
    base.join(APP_DIR_NAME)
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf, AppDirError> {
    std::fs::create_dir_all(&path).map_err(|source| AppDirError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn config_base_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("AGREEMAP_CONFIG_HOME") {
        return Some(PathBuf::from(path));
    }
    BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf())
}
