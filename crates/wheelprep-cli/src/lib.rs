#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

// Used by the binaries only
use dotenvy as _;
use tokio as _;

#[cfg(test)]
use tempfile as _;

pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use error::CliError;
pub use logging::init_tracing;
pub use parser::{DownloadCli, PackageCli};
