#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

mod error;
mod exec;
mod request;

pub use error::DownloadError;
pub use exec::{locate_interpreter, run_download};
pub use request::{DEFAULT_PYTHON, DownloadRequest, PipDownload, split_extra_args};

