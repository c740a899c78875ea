//! Firmware asset pipeline module
//!
//! Turns build outputs into sources the firmware compiles in: the gzipped web
//! UI as a byte array header, the LED gamma lookup table, the versioned
//! release image, and cleanup of generated intermediates.

pub mod clean;
pub mod common;
pub mod conversions;
pub mod fragment;
pub mod header;
pub mod release;

pub use common::{
    AssetError,
    Result,
};

pub use fragment::{
    emit_byte_array,
    emit_gamma_table,
    parse_array,
    verify_header,
    GammaParams,
    GammaTable,
    HexCase,
    ParsedArray,
    SourceFragment,
};

pub use header::{
    EmbedConfig,
    EmbedConfigBuilder,
    GammaConfig,
    GammaConfigBuilder,
    HeaderWriter,
    StandardHeaderWriter,
};

pub use conversions::{
    BlobToHeaderPipeline,
    GammaTablePipeline,
    PipelineTimings,
};

pub use release::{
    extract_app_version,
    package_release,
    ReleaseConfig,
};

pub use clean::{clean, CleanConfig, CleanRule};
