//! Packaging error types.

use std::path::PathBuf;

use thiserror::Error;
use wheelprep_core::PathError;

/// Errors that can occur while building the addon archive.
#[derive(Error, Debug)]
pub enum PackageError {
    #[error("Missing addon entrypoint: {0}")]
    MissingEntrypoint(PathBuf),

    #[error("Wheels directory not found: {0}")]
    WheelsDirMissing(PathBuf),

    #[error("Invalid addon name {0:?}: must be a single non-empty path component")]
    InvalidAddonName(String),

    #[error(transparent)]
    DistDir(#[from] PathError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to write archive: {0}")]
    Zip(#[from] zip::result::ZipError),
}
