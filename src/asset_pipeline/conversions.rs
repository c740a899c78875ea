//! Pipeline conversions module
//!
//! Orchestration from input files to written headers.

mod blob_to_header;
mod gamma_to_header;
mod timing;


pub use blob_to_header::BlobToHeaderPipeline;
pub use gamma_to_header::GammaTablePipeline;
pub use timing::{PipelineTimings, StepTiming, Timer};
