//! Directory creation.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::error::PathError;

/// Ensure the directory exists, creating it and any missing parents.
///
/// An existing directory is reused as-is: nothing inside it is removed or
/// inspected. A path that exists but is not a directory is an error.
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }

    debug!(path = %path.display(), "Creating directory");
    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
