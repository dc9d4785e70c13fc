//! `package-addon` handler.

use std::path::PathBuf;

use tracing::debug;
use wheelprep_core::repo_root;
use wheelprep_package::{PackageRequest, build_archive};

use crate::error::CliError;
use crate::parser::PackageCli;

/// Build the archive under the repository root and print its path.
pub fn execute(cli: &PackageCli) -> Result<PathBuf, CliError> {
    let root = repo_root();
    debug!(root = %root.path.display(), source = ?root.source, "Resolved repository root");

    let request = PackageRequest::new(root.path)
        .with_addon_name(cli.addon_name.clone())
        .with_wheels(cli.include_wheels)
        .with_wheels_dir(&cli.wheels_dir);

    let archive = build_archive(&request)?;
    println!("Created {}", archive.display());
    Ok(archive)
}
