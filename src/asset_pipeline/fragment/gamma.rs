//! Gamma-correction lookup table generation.
//!
//! The table maps a linear input level `i` in `0..=max_in` onto
//! `floor((i / max_in)^gamma * max_out + 0.5)`, the power-law response LED
//! drivers need to look perceptually linear.

use tracing::debug;

use crate::asset_pipeline::common::error::{AssetError, Result};
use crate::asset_pipeline::fragment::types::{validate_symbol, SourceFragment};
use crate::asset_pipeline::header::types::GammaConfig;

/// Largest input range a generated table may cover.
const MAX_TABLE_INPUT: u32 = 65_535;

/// The bit width of the u32 level type, used for deriving the output bit depth.
const U32_BITS: u32 = 32;

/// Parameters of the power-law curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaParams {
    /// Correction exponent (2.8 for the RGBW driver)
    pub gamma: f64,
    /// Top end of the input range
    pub max_in: u32,
    /// Top end of the output range
    pub max_out: u32,
}

impl Default for GammaParams {
    fn default() -> Self {
        Self {
            gamma: 2.8,
            max_in: 255,
            max_out: 255,
        }
    }
}

impl GammaParams {
    pub fn validate(&self) -> Result<()> {
        if self.max_in == 0 {
            return Err(AssetError::InvalidGammaParams(
                "max_in must be greater than zero".to_string(),
            ));
        }
        if self.max_in > MAX_TABLE_INPUT {
            return Err(AssetError::InvalidGammaParams(format!(
                "max_in {} exceeds {}",
                self.max_in, MAX_TABLE_INPUT
            )));
        }
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(AssetError::InvalidGammaParams(format!(
                "gamma must be a positive finite number, got {}",
                self.gamma
            )));
        }
        Ok(())
    }

    /// Bits needed to hold `max_out`, e.g. 255 -> 8, 1023 -> 10.
    pub fn output_bits(&self) -> u32 {
        (U32_BITS - self.max_out.leading_zeros()).max(1)
    }

    /// Narrowest unsigned C type that holds every level.
    pub fn c_type(&self) -> &'static str {
        match self.output_bits() {
            0..=8 => "uint8_t",
            9..=16 => "uint16_t",
            _ => "uint32_t",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GammaTable {
    params: GammaParams,
    levels: Vec<u32>,
}

impl GammaTable {
    pub fn compute(params: GammaParams) -> Result<Self> {
        params.validate()?;

        let max_in = f64::from(params.max_in);
        let max_out = f64::from(params.max_out);

        let levels: Vec<u32> = (0..=params.max_in)
            .map(|i| {
                let level = ((f64::from(i) / max_in).powf(params.gamma) * max_out + 0.5).floor();
                debug_assert!(
                    (0.0..=max_out).contains(&level),
                    "level {level} for input {i} escapes [0, {max_out}]"
                );
                level as u32
            })
            .collect();

        debug!(
            "Computed gamma table: gamma={}, {} entries, max level {}",
            params.gamma,
            levels.len(),
            levels.last().copied().unwrap_or_default()
        );

        Ok(Self { params, levels })
    }

    pub fn params(&self) -> &GammaParams {
        &self.params
    }

    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    pub fn level(&self, input: usize) -> Option<u32> {
        self.levels.get(input).copied()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Renders `table` as a commented, column-aligned array declaration.
pub fn emit_gamma_table(table: &GammaTable, config: &GammaConfig) -> Result<SourceFragment> {
    validate_symbol(&config.symbol)?;
    if config.values_per_line == 0 {
        return Err(AssetError::InvalidConfig(
            "values_per_line must be at least 1".to_string(),
        ));
    }

    let params = table.params();
    let mut lines = vec![
        "// This table remaps linear input values to nonlinear gamma-corrected output".to_string(),
        format!(
            "// values. The output values are specified for {}-bit colours with a gamma",
            params.output_bits()
        ),
        format!("// correction factor of {}", params.gamma),
    ];

    lines.push(match config.storage_qualifier.as_deref() {
        Some(qualifier) => format!(
            "const static {} {} {}[{}] = {{",
            params.c_type(),
            qualifier,
            config.symbol,
            table.len()
        ),
        None => format!(
            "const static {} {}[{}] = {{",
            params.c_type(),
            config.symbol,
            table.len()
        ),
    });

    let width = config.field_width;
    let last = table.len().saturating_sub(1);
    let mut line = String::new();
    for (i, level) in table.levels().iter().enumerate() {
        if i > 0 && i % config.values_per_line == 0 {
            lines.push(std::mem::take(&mut line));
        }
        line.push_str(&format!("{level:>width$}"));
        if i < last {
            line.push(',');
        }
    }
    line.push_str(" };");
    lines.push(line);

    Ok(SourceFragment::new(lines, true))
}
