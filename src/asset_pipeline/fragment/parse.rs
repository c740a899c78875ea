//! Reads emitted array declarations back into their values.

use crate::asset_pipeline::common::error::{AssetError, Result};

/// Values recovered from an emitted header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArray {
    /// Value of the `#define <symbol>_len` line, when the header has one
    pub declared_len: Option<usize>,
    /// Array elements in declaration order
    pub values: Vec<u32>,
}

impl ParsedArray {
    /// Narrows the values to bytes, failing on anything above 0xff.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                u8::try_from(value).map_err(|_| {
                    AssetError::MalformedArray(format!("element {i} ({value}) is not a byte"))
                })
            })
            .collect()
    }
}

pub fn parse_array(text: &str) -> Result<ParsedArray> {
    let open = text
        .find('{')
        .ok_or_else(|| AssetError::MalformedArray("missing '{'".to_string()))?;
    let close = text[open..]
        .find('}')
        .map(|offset| open + offset)
        .ok_or_else(|| AssetError::MalformedArray("missing '}'".to_string()))?;

    let tokens: Vec<&str> = text[open + 1..close].split(',').map(str::trim).collect();
    let mut values = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        if token.is_empty() {
            // `{}` and a single trailing comma are both valid C
            if i + 1 == tokens.len() {
                break;
            }
            return Err(AssetError::MalformedArray(format!("empty element at position {i}")));
        }
        values.push(parse_value(token)?);
    }

    Ok(ParsedArray {
        declared_len: parse_declared_len(&text[..open])?,
        values,
    })
}

/// Checks that `header` declares exactly the bytes of `blob`.
pub fn verify_header(header: &str, blob: &[u8]) -> Result<()> {
    let parsed = parse_array(header)?;

    let Some(declared) = parsed.declared_len else {
        return Err(AssetError::VerificationFailed(
            "no `#define <symbol>_len` constant before the array".to_string(),
        ));
    };
    if declared != blob.len() {
        return Err(AssetError::VerificationFailed(format!(
            "declared length {} but blob has {} bytes",
            declared,
            blob.len()
        )));
    }

    if parsed.values.len() != blob.len() {
        return Err(AssetError::VerificationFailed(format!(
            "array has {} elements but blob has {} bytes",
            parsed.values.len(),
            blob.len()
        )));
    }

    let mismatch = parsed
        .values
        .iter()
        .zip(blob)
        .position(|(&value, &byte)| value != u32::from(byte));
    if let Some(index) = mismatch {
        return Err(AssetError::VerificationFailed(format!(
            "element {} is {:#04x} in the header but {:#04x} in the blob",
            index, parsed.values[index], blob[index]
        )));
    }

    Ok(())
}

fn parse_value(token: &str) -> Result<u32> {
    let parsed = match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => token.parse(),
    };
    parsed.map_err(|e| AssetError::MalformedArray(format!("{token:?}: {e}")))
}

fn parse_declared_len(preamble: &str) -> Result<Option<usize>> {
    for line in preamble.lines() {
        let mut parts = line.split_whitespace();
        if parts.next() != Some("#define") {
            continue;
        }
        let (Some(name), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };
        if name.ends_with("_len") {
            return value.parse().map(Some).map_err(|e| {
                AssetError::MalformedArray(format!("{name} = {value:?}: {e}"))
            });
        }
    }
    Ok(None)
}
