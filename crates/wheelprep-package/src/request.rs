//! Packaging request.

use std::path::{Path, PathBuf};

/// Top-level folder name inside the archive.
pub const DEFAULT_ADDON_NAME: &str = "webcam_uv_texture_stream";

/// Wheels directory, relative to the repository root.
pub const DEFAULT_WHEELS_DIR: &str = "wheels";

/// Archive output directory, relative to the repository root.
pub const DIST_DIR: &str = "dist";

/// Addon entrypoint file, relative to the repository root.
pub const ENTRYPOINT: &str = "__init__.py";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRequest {
    /// Repository root holding the entrypoint and `dist/`.
    pub root: PathBuf,
    pub addon_name: String,
    pub include_wheels: bool,
    /// Absolute, or already joined onto `root`.
    pub wheels_dir: PathBuf,
}

impl PackageRequest {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let wheels_dir = root.join(DEFAULT_WHEELS_DIR);
        Self {
            root,
            addon_name: DEFAULT_ADDON_NAME.to_string(),
            include_wheels: false,
            wheels_dir,
        }
    }

    #[must_use]
    pub fn with_addon_name(mut self, name: impl Into<String>) -> Self {
        self.addon_name = name.into();
        self
    }

    #[must_use]
    pub const fn with_wheels(mut self, include: bool) -> Self {
        self.include_wheels = include;
        self
    }

    /// Set the wheels directory; relative paths are taken from the root.
    #[must_use]
    pub fn with_wheels_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.wheels_dir = self.root.join(dir);
        self
    }

    pub fn entrypoint(&self) -> PathBuf {
        self.root.join(ENTRYPOINT)
    }

    pub fn archive_path(&self) -> PathBuf {
        self.root
            .join(DIST_DIR)
            .join(format!("{}.zip", self.addon_name))
    }
}
