//! Path utilities for wheelprep.
//!
//! This module provides the canonical path resolution for every binary:
//! - Repository root (defaults are relative to it)
//! - Requirements file and wheel output directory
//! - Directory creation before a download runs
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Resolution is pure; only `ensure_directory` touches the filesystem

mod ensure;
mod error;
mod resolver;
mod root;

#[cfg(test)]
pub(crate) mod test_utils;

// Error type
pub use error::PathError;

// Repository root
pub use root::{REPO_ROOT_ENV, RepoRoot, RootSource, repo_root};

// Download inputs and outputs
pub use resolver::{
    DEFAULT_OUTPUT_DIR, DEFAULT_REQUIREMENTS_FILE, DownloadPaths, default_output_dir,
    default_requirements, resolve_download_paths,
};

// Directory operations
pub use ensure::ensure_directory;
