//! Download error types.

use thiserror::Error;
use wheelprep_core::PathError;

/// Errors that can occur while running a wheel download.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// The output directory could not be prepared.
    #[error(transparent)]
    OutputDir(#[from] PathError),

    /// The interpreter executable does not exist.
    #[error("Python interpreter not found: {python}")]
    InterpreterNotFound { python: String },

    /// The interpreter exists but could not be started.
    #[error("Failed to launch {python}: {source}")]
    Spawn {
        python: String,
        #[source]
        source: std::io::Error,
    },

    /// pip ran and exited unsuccessfully.
    #[error("pip download {}", describe_exit(.code, .signal))]
    ToolFailed {
        code: Option<i32>,
        signal: Option<i32>,
    },
}

fn describe_exit(code: &Option<i32>, signal: &Option<i32>) -> String {
    match (*code, *signal) {
        (Some(code), _) => format!("exited with status {code}"),
        (None, Some(signal)) => format!("was terminated by signal {signal}"),
        (None, None) => "exited abnormally".to_string(),
    }
}
