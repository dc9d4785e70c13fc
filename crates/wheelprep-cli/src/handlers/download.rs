//! `download-wheels` handler.

use std::path::{Path, PathBuf};

use tracing::debug;
use wheelprep_core::{repo_root, resolve_download_paths};
use wheelprep_download::{DEFAULT_PYTHON, DownloadRequest, run_download, split_extra_args};

use crate::error::CliError;
use crate::parser::DownloadCli;

/// Turn parsed arguments into a download request rooted at `root`.
pub fn build_request(cli: &DownloadCli, root: &Path) -> DownloadRequest {
    let paths = resolve_download_paths(
        root,
        cli.requirements.as_deref().map(Path::new),
        cli.output_dir.as_deref().map(Path::new),
    );
    debug!("Resolved download paths:\n{paths}");

    let python = if cli.python.trim().is_empty() {
        DEFAULT_PYTHON
    } else {
        cli.python.as_str()
    };

    DownloadRequest::new(paths.requirements, paths.output_dir)
        .with_python(python)
        .with_extra_args(split_extra_args(&cli.pip_args))
}

/// Execute the download and print the confirmation line.
///
/// Returns the output directory on success.
pub async fn execute(cli: &DownloadCli) -> Result<PathBuf, CliError> {
    let root = repo_root();
    debug!(root = %root.path.display(), source = ?root.source, "Resolved repository root");

    let request = build_request(cli, &root.path);
    run_download(&request).await?;

    println!("Wheels downloaded to {}", request.output_dir.display());
    Ok(request.output_dir)
}
