//! Durable JSON artifacts for catalog tables and similarity matrices
//!
//! All derived data is persisted as one JSON artifact per logical table.
//! Writes go to a temporary sibling file first and are swapped into place
//! with a rename, so a reader never observes a half-written artifact.

use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CinerecError, Result};

/// Read and deserialize an artifact; `Ok(None)` when the file is absent
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let value = serde_json::from_str(&content)?;
    Ok(Some(value))
}

/// Read an artifact that must exist
pub fn read_json_required<T: DeserializeOwned>(path: &Path) -> Result<T> {
    read_json(path)?.ok_or_else(|| CinerecError::MissingCatalog {
        path: path.to_path_buf(),
    })
}

/// Serialize and atomically replace an artifact
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let content = serde_json::to_string(value)?;
    let tmp = tmp_path(path);
    fs::write(&tmp, &content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
