use tracing::debug;

use crate::asset_pipeline::common::error::{AssetError, Result};
use crate::asset_pipeline::fragment::types::{validate_symbol, HexCase, SourceFragment};
use crate::asset_pipeline::header::types::EmbedConfig;

const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";
const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Renders `blob` as a `#define <symbol>_len` constant followed by a
/// read-only byte array declaration.
///
/// Every body line holds `values_per_line` literals; all but the last end
/// with a comma, and the closing `};` carries no trailing newline.
pub fn emit_byte_array(blob: &[u8], config: &EmbedConfig) -> Result<SourceFragment> {
    validate_symbol(&config.symbol)?;
    if config.values_per_line == 0 {
        return Err(AssetError::InvalidConfig(
            "values_per_line must be at least 1".to_string(),
        ));
    }
    if blob.is_empty() {
        return Err(AssetError::EmptyBlob);
    }

    debug!(
        "Emitting {} bytes as {}[] ({} per line)",
        blob.len(),
        config.symbol,
        config.values_per_line
    );

    let digits = match config.hex_case {
        HexCase::Lower => HEX_LOWER,
        HexCase::Upper => HEX_UPPER,
    };

    let mut lines = Vec::with_capacity(blob.len().div_ceil(config.values_per_line) + 3);
    lines.push(format!("#define {}_len {}", config.symbol, blob.len()));
    lines.push(declaration(config));

    let last = blob.len() - 1;
    for (row, chunk) in blob.chunks(config.values_per_line).enumerate() {
        let mut line = String::with_capacity(chunk.len() * 5);
        for (offset, &byte) in chunk.iter().enumerate() {
            line.push_str("0x");
            line.push(digits[usize::from(byte >> 4)] as char);
            line.push(digits[usize::from(byte & 0x0f)] as char);
            if row * config.values_per_line + offset < last {
                line.push(',');
            }
        }
        lines.push(line);
    }

    lines.push("};".to_string());
    Ok(SourceFragment::new(lines, false))
}

fn declaration(config: &EmbedConfig) -> String {
    match config.storage_qualifier.as_deref() {
        Some(qualifier) => format!(
            "const {} {}[] {} = {{",
            config.element_type, config.symbol, qualifier
        ),
        None => format!("const {} {}[] = {{", config.element_type, config.symbol),
    }
}
