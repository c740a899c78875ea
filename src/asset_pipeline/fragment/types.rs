//! Source fragment types

use std::fmt;

use crate::asset_pipeline::common::error::{AssetError, Result};

/// Case of the hex digits in emitted byte literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexCase {
    /// `0xab` (default, matches the firmware's existing headers)
    #[default]
    Lower,
    /// `0xAB`
    Upper,
}

/// Text lines ready to be dropped into a C/C++ source tree
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceFragment {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl SourceFragment {
    pub fn new(lines: Vec<String>, trailing_newline: bool) -> Self {
        Self {
            lines,
            trailing_newline,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    /// Renders the lines joined by `\n`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SourceFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        if self.trailing_newline && !self.lines.is_empty() {
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Checks that `symbol` can be used as a C identifier.
pub(crate) fn validate_symbol(symbol: &str) -> Result<()> {
    let mut chars = symbol.chars();
    let valid = match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(AssetError::InvalidSymbol(symbol.to_string()))
    }
}
