//! Source fragment generation module
//!
//! Pure functions turning blobs and lookup tables into C source text, plus the
//! parser that reads that text back.

mod byte_array;
mod gamma;
mod parse;
pub mod types;

#[cfg(test)]
mod tests;

pub use byte_array::emit_byte_array;
pub use gamma::{emit_gamma_table, GammaParams, GammaTable};
pub use parse::{parse_array, verify_header, ParsedArray};
pub use types::{HexCase, SourceFragment};
