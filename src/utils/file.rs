//! File reading utilities

use crate::error::{Result, RigsmithError};
use std::fs;
use std::path::{Path, PathBuf};

/// Safely read a file to string with error handling
pub fn read_file_safe<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(path).map_err(RigsmithError::from)
}

/// Expand a leading `~` in a user-supplied path
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw.trim()).into_owned())
}

/// Write `contents` to `path` unless the file already exists.
///
/// Parent directories are created as needed. Returns whether the file was written.
pub fn write_if_missing<P: AsRef<Path>>(path: P, contents: &str) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_if_missing_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        assert!(write_if_missing(&path, "first").unwrap());
        assert!(!write_if_missing(&path, "second").unwrap());
        assert_eq!(read_file_safe(&path).unwrap(), "first");
    }

    #[test]
    fn tilde_expands_to_home() {
        let expanded = expand_path("~/rigsmith.toml");
        assert!(!expanded.starts_with("~"));
        assert!(expanded.ends_with("rigsmith.toml"));
        assert_eq!(expand_path("/etc/rigsmith.toml"), PathBuf::from("/etc/rigsmith.toml"));
    }
}
