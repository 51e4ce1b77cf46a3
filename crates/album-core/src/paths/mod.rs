//! Path utilities for the album data directory.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters decide how to report failures

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "ALBUM_DATA_DIR";

/// File name of the local comment database.
pub const DATABASE_FILE_NAME: &str = "album.db";

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the system data directory.
    #[error("Cannot determine system data directory")]
    NoDataDir,

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },
}

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `ALBUM_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/photo-album`)
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::data_dir()
        .map(|d| d.join("photo-album"))
        .ok_or(PathError::NoDataDir)
}

/// Get the path to the local comment database, creating its directory.
pub fn database_path() -> Result<PathBuf, PathError> {
    database_path_in(&data_root()?)
}

/// Database path under an explicit root, creating `<root>/data` if needed.
pub fn database_path_in(root: &Path) -> Result<PathBuf, PathError> {
    let data_dir = root.join("data");

    fs::create_dir_all(&data_dir).map_err(|e| PathError::CreateFailed {
        path: data_dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(data_dir.join(DATABASE_FILE_NAME))
}
