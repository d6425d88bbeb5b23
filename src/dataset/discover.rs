//! Locate the dataset CSV by walking a base directory.
//!
//! Mirrors the workflow the tool replaces: the file lives somewhere under the
//! user's home directory and is found by name, first hit wins.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use walkdir::WalkDir;

/// Search `root` recursively for a file named `file_name`.
///
/// Returns the first match in walk order, or `None` when the file does not
/// exist under `root`. Unreadable directories are skipped rather than
/// aborting the search.
pub fn find_dataset(root: &Path, file_name: &str) -> Option<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .find(|entry| {
            entry.file_type().is_file() && entry.file_name().to_str() == Some(file_name)
        })
        .map(|entry| entry.into_path())
}

/// Default search root when the config does not pin one: the home directory.
pub fn default_search_root() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn finds_file_in_nested_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        let target = nested.join("predictions.csv");
        std::fs::write(&target, "label,x,y\n").unwrap();

        let found = find_dataset(dir.path(), "predictions.csv");
        assert_eq!(found, Some(target));
    }

    #[test]
    fn missing_file_yields_none() {
        let dir = tempdir().unwrap();
        assert_eq!(find_dataset(dir.path(), "predictions.csv"), None);
    }

    #[test]
    fn name_must_match_exactly() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("predictions.csv.bak"), "x").unwrap();
        assert_eq!(find_dataset(dir.path(), "predictions.csv"), None);
    }
}
