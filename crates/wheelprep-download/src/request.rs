//! Download request and pip argument assembly.

use std::ffi::OsString;
use std::path::PathBuf;

/// Interpreter used when `PYTHON_BIN` is not set.
pub const DEFAULT_PYTHON: &str = "python3";

const BINARY_ONLY: &str = "--only-binary=:all:";

/// Everything needed for one download run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Requirements file handed to pip with `-r`.
    pub requirements: PathBuf,
    /// Destination directory handed to pip with `-d`.
    pub output_dir: PathBuf,
    /// Interpreter name or path providing pip.
    pub python: String,
    /// Extra pip arguments, appended after the mandatory ones.
    pub extra_args: Vec<String>,
}

impl DownloadRequest {
    pub fn new(requirements: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            requirements: requirements.into(),
            output_dir: output_dir.into(),
            python: DEFAULT_PYTHON.to_string(),
            extra_args: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_python(mut self, python: impl Into<String>) -> Self {
        self.python = python.into();
        self
    }

    #[must_use]
    pub fn with_extra_args(mut self, extra_args: Vec<String>) -> Self {
        self.extra_args = extra_args;
        self
    }
}

/// The pip invocation for a [`DownloadRequest`].
#[derive(Debug, Clone, Copy)]
pub struct PipDownload<'a> {
    request: &'a DownloadRequest,
}

impl<'a> PipDownload<'a> {
    pub const fn new(request: &'a DownloadRequest) -> Self {
        Self { request }
    }

    /// Arguments passed to the interpreter, program name excluded.
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["-m", "pip", "download", BINARY_ONLY, "-r"]
            .into_iter()
            .map(OsString::from)
            .collect();
        args.push(self.request.requirements.clone().into_os_string());
        args.push(OsString::from("-d"));
        args.push(self.request.output_dir.clone().into_os_string());
        args.extend(self.request.extra_args.iter().map(OsString::from));
        args
    }

    /// Human-readable command line for logs.
    pub fn display(&self) -> String {
        let mut line = self.request.python.clone();
        for arg in self.args() {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

/// Split `PIP_ARGS` the way an unquoted shell expansion would: on runs of
/// whitespace, with no quote handling.
pub fn split_extra_args(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}
