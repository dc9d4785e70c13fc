//! Repository root detection.
//!
//! Defaults live next to the tooling, not wherever it is invoked from. The
//! workspace root is captured by `build.rs` and can be overridden at runtime.

use std::env;
use std::path::PathBuf;

use tracing::debug;

/// Environment variable that overrides the build-time repository root.
pub const REPO_ROOT_ENV: &str = "WHEELPREP_ROOT";

/// How the repository root was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    /// `WHEELPREP_ROOT` was set.
    EnvVar,
    /// The workspace this binary was built from.
    BuildTime,
}

/// Resolution result for the repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRoot {
    /// The resolved root directory.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: RootSource,
}

/// Resolve the repository root.
///
/// Resolution order:
/// 1. `WHEELPREP_ROOT` environment variable, when non-empty
/// 2. Workspace root recorded at build time
///
/// The caller's working directory never participates.
pub fn repo_root() -> RepoRoot {
    if let Ok(value) = env::var(REPO_ROOT_ENV) {
        if !value.trim().is_empty() {
            debug!(root = %value, "Using repository root from {REPO_ROOT_ENV}");
            return RepoRoot {
                path: PathBuf::from(value),
                source: RootSource::EnvVar,
            };
        }
    }

    RepoRoot {
        path: PathBuf::from(env!("WHEELPREP_REPO_ROOT")),
        source: RootSource::BuildTime,
    }
}
