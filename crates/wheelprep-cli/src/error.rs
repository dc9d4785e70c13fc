//! CLI error type and exit code mapping.

use thiserror::Error;
use wheelprep_download::DownloadError;
use wheelprep_package::PackageError;

/// Exit code used by shells when a command cannot be found.
const EXIT_NOT_FOUND: i32 = 127;
/// Exit code used by shells when a command cannot be executed.
const EXIT_CANNOT_EXECUTE: i32 = 126;

// sysexits.h
const EX_NOINPUT: i32 = 66;
const EX_CANTCREAT: i32 = 73;
const EX_IOERR: i32 = 74;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Download(#[from] DownloadError),

    #[error(transparent)]
    Package(#[from] PackageError),
}

impl CliError {
    /// Map error to the process exit code.
    ///
    /// A failing pip run keeps pip's own code. Failures raised before pip
    /// runs follow shell and sysexits conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Download(err) => match err {
                DownloadError::ToolFailed { code: Some(code), .. } => *code,
                DownloadError::ToolFailed {
                    code: None,
                    signal: Some(signal),
                } => 128 + signal,
                DownloadError::ToolFailed { .. } => 1,
                DownloadError::InterpreterNotFound { .. } => EXIT_NOT_FOUND,
                DownloadError::Spawn { .. } => EXIT_CANNOT_EXECUTE,
                DownloadError::OutputDir(_) => EX_CANTCREAT,
            },
            Self::Package(err) => match err {
                PackageError::MissingEntrypoint(_) | PackageError::WheelsDirMissing(_) => {
                    EX_NOINPUT
                }
                PackageError::InvalidAddonName(_) => 2,
                PackageError::DistDir(_) => EX_CANTCREAT,
                PackageError::Io { .. } | PackageError::Walk { .. } | PackageError::Zip(_) => {
                    EX_IOERR
                }
            },
        }
    }

    /// Whether the underlying tool has already reported this failure.
    ///
    /// pip prints its own diagnostics, so repeating them is noise.
    pub const fn reported_by_tool(&self) -> bool {
        matches!(self, Self::Download(DownloadError::ToolFailed { .. }))
    }
}
