//! Header writing module
//!
//! Configuration for generated headers and the writers that put fragments on disk.

mod writer;
mod standard_header_writer;
pub mod types;

pub use writer::HeaderWriter;
pub use standard_header_writer::StandardHeaderWriter;
pub use types::{EmbedConfig, EmbedConfigBuilder, GammaConfig, GammaConfigBuilder};
