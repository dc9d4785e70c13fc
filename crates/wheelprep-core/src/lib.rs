#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod paths;

// Re-export path utilities
pub use paths::{
    DEFAULT_OUTPUT_DIR, DEFAULT_REQUIREMENTS_FILE, DownloadPaths, PathError, REPO_ROOT_ENV,
    RepoRoot, RootSource, default_output_dir, default_requirements, ensure_directory, repo_root,
    resolve_download_paths,
};
