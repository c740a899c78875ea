//! Release packaging module
//!
//! Names the externally built firmware image after the version in its header.

mod package;
mod version;
pub mod types;


pub use package::package_release;
pub use version::extract_app_version;
pub use types::{ReleaseConfig, ReleaseConfigBuilder};
