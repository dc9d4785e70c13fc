//! Argument definitions for both binaries.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use wheelprep_download::DEFAULT_PYTHON;
use wheelprep_package::{DEFAULT_ADDON_NAME, DEFAULT_WHEELS_DIR};

/// Download binary-only wheels listed in a requirements file.
///
/// Defaults are resolved against the repository root, not the current
/// working directory.
#[derive(Parser, Debug)]
#[command(name = "download-wheels")]
#[command(about = "Download pre-built wheels for a requirements file")]
#[command(version)]
pub struct DownloadCli {
    /// Requirements file [default: <repo-root>/requirements.txt]
    ///
    /// Kept as a raw string so an empty argument reaches the resolver and
    /// falls back to the default.
    pub requirements: Option<OsString>,

    /// Output directory for wheels [default: <repo-root>/wheels]
    pub output_dir: Option<OsString>,

    /// Interpreter providing pip
    #[arg(long = "python", env = "PYTHON_BIN", default_value = DEFAULT_PYTHON, hide_env_values = true)]
    pub python: String,

    /// Extra pip arguments, split on whitespace and appended verbatim
    #[arg(
        long = "pip-args",
        env = "PIP_ARGS",
        default_value = "",
        allow_hyphen_values = true,
        hide_default_value = true
    )]
    pub pip_args: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Package the addon into a distributable zip.
#[derive(Parser, Debug)]
#[command(name = "package-addon")]
#[command(about = "Package the Blender addon into a distributable zip")]
#[command(version)]
pub struct PackageCli {
    /// Top-level addon folder name inside the zip
    #[arg(long = "addon-name", default_value = DEFAULT_ADDON_NAME)]
    pub addon_name: String,

    /// Include the wheels directory in the zip
    #[arg(long = "include-wheels")]
    pub include_wheels: bool,

    /// Path to the wheels directory, relative to the repository root
    #[arg(long = "wheels-dir", default_value = DEFAULT_WHEELS_DIR)]
    pub wheels_dir: PathBuf,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
