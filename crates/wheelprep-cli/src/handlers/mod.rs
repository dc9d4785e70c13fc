//! Command handlers.
//!
//! Handlers are thin: resolve inputs, call into the library crates, and
//! print the single result line on success.

pub mod download;
pub mod package;
