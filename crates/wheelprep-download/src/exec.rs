//! Running the pip download.
//!
//! Single awaited child process with inherited stdio, so pip's progress
//! output goes straight to the terminal.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::ExitStatus;

use tokio::process::Command;
use tracing::{Level, debug, enabled, info};
use wheelprep_core::ensure_directory;

use crate::error::DownloadError;
use crate::request::{DownloadRequest, PipDownload};

/// Look up the interpreter on `PATH` (or accept it as a direct path).
///
/// Used for diagnostics only; the spawn itself performs the authoritative
/// lookup.
pub fn locate_interpreter(python: &str) -> Option<PathBuf> {
    which::which(python).ok()
}

/// Create the output directory and run the binary-only download.
///
/// Returns once pip exits. Any non-zero exit is returned as
/// [`DownloadError::ToolFailed`] with pip's own status.
pub async fn run_download(request: &DownloadRequest) -> Result<(), DownloadError> {
    ensure_directory(&request.output_dir)?;

    let pip = PipDownload::new(request);
    if enabled!(Level::DEBUG) {
        match locate_interpreter(&request.python) {
            Some(path) => debug!(python = %path.display(), "Resolved interpreter"),
            None => debug!(python = %request.python, "Interpreter not found on PATH"),
        }
    }
    info!(command = %pip.display(), "Running pip download");

    let status = Command::new(&request.python)
        .args(pip.args())
        .status()
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => DownloadError::InterpreterNotFound {
                python: request.python.clone(),
            },
            _ => DownloadError::Spawn {
                python: request.python.clone(),
                source: e,
            },
        })?;

    if !status.success() {
        return Err(DownloadError::ToolFailed {
            code: status.code(),
            signal: exit_signal(status),
        });
    }

    debug!(output_dir = %request.output_dir.display(), "pip download finished");
    Ok(())
}

#[cfg(unix)]
fn exit_signal(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
const fn exit_signal(_status: ExitStatus) -> Option<i32> {
    None
}
