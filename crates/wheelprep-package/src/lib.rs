#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

mod archive;
mod error;
mod request;

pub use archive::build_archive;
pub use error::PackageError;
pub use request::{DEFAULT_ADDON_NAME, DEFAULT_WHEELS_DIR, DIST_DIR, ENTRYPOINT, PackageRequest};
