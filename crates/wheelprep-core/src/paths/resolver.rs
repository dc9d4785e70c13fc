//! Resolution of the download inputs and outputs.
//!
//! Mirrors `${1:-default}` semantics: an argument that is absent or empty
//! falls back to the default under the repository root.

use std::fmt;
use std::path::{Path, PathBuf};

/// Requirements file name under the repository root.
pub const DEFAULT_REQUIREMENTS_FILE: &str = "requirements.txt";

/// Wheel output directory name under the repository root.
pub const DEFAULT_OUTPUT_DIR: &str = "wheels";

/// Default requirements file: `<root>/requirements.txt`.
pub fn default_requirements(root: &Path) -> PathBuf {
    root.join(DEFAULT_REQUIREMENTS_FILE)
}

/// Default output directory: `<root>/wheels`.
pub fn default_output_dir(root: &Path) -> PathBuf {
    root.join(DEFAULT_OUTPUT_DIR)
}

/// Resolved requirements file and output directory for one download run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadPaths {
    pub requirements: PathBuf,
    pub output_dir: PathBuf,
}

/// Resolve the download paths against `root`.
///
/// Explicit values are kept as given, including relative ones, which stay
/// relative to the caller's working directory.
pub fn resolve_download_paths(
    root: &Path,
    requirements: Option<&Path>,
    output_dir: Option<&Path>,
) -> DownloadPaths {
    DownloadPaths {
        requirements: non_empty(requirements)
            .map_or_else(|| default_requirements(root), Path::to_path_buf),
        output_dir: non_empty(output_dir)
            .map_or_else(|| default_output_dir(root), Path::to_path_buf),
    }
}

fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}

impl fmt::Display for DownloadPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "requirements = {}", self.requirements.display())?;
        write!(f, "output_dir = {}", self.output_dir.display())
    }
}
