//! Common utilities module
//!
//! Shared error type and filesystem helpers used across the asset pipeline.

pub mod error;
pub mod fs;

pub use error::{AssetError, Result};
pub use fs::{write_atomically, remove_if_present};
