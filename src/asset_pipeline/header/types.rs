//! Header generation configuration types

use std::path::PathBuf;

use crate::asset_pipeline::fragment::{GammaParams, HexCase};

/// Configuration for embedding a blob as a byte array header
#[derive(Debug, Clone)]
pub struct EmbedConfig {
    /// Base symbol; the length constant is named `<symbol>_len`
    pub symbol: String,
    /// C element type of the array
    pub element_type: String,
    /// Storage qualifier placed after `[]`, e.g. `PROGMEM` for AVR/ESP flash
    pub storage_qualifier: Option<String>,
    /// Literals per body line; purely cosmetic
    pub values_per_line: usize,
    /// Case of the hex digits
    pub hex_case: HexCase,
    /// Delete the input blob once the header has been written
    pub remove_source: bool,
    /// Further intermediate files to delete after a successful run
    pub intermediates: Vec<PathBuf>,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            symbol: "html_gz".to_string(),
            element_type: "uint8_t".to_string(),
            storage_qualifier: Some("PROGMEM".to_string()),
            values_per_line: 1000,
            hex_case: HexCase::Lower,
            remove_source: false,
            intermediates: Vec::new(),
        }
    }
}

impl EmbedConfig {
    pub fn builder() -> EmbedConfigBuilder {
        EmbedConfigBuilder::default()
    }
}

/// Builder for EmbedConfig
#[derive(Default)]
pub struct EmbedConfigBuilder {
    symbol: Option<String>,
    element_type: Option<String>,
    storage_qualifier: Option<Option<String>>,
    values_per_line: Option<usize>,
    hex_case: Option<HexCase>,
    remove_source: Option<bool>,
    intermediates: Vec<PathBuf>,
}

impl EmbedConfigBuilder {
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn element_type(mut self, element_type: impl Into<String>) -> Self {
        self.element_type = Some(element_type.into());
        self
    }

    pub fn storage_qualifier(mut self, qualifier: Option<String>) -> Self {
        self.storage_qualifier = Some(qualifier);
        self
    }

    pub fn values_per_line(mut self, count: usize) -> Self {
        self.values_per_line = Some(count);
        self
    }

    pub fn hex_case(mut self, case: HexCase) -> Self {
        self.hex_case = Some(case);
        self
    }

    pub fn remove_source(mut self, enable: bool) -> Self {
        self.remove_source = Some(enable);
        self
    }

    pub fn intermediate(mut self, path: impl Into<PathBuf>) -> Self {
        self.intermediates.push(path.into());
        self
    }

    pub fn build(self) -> EmbedConfig {
        let default = EmbedConfig::default();
        EmbedConfig {
            symbol: self.symbol.unwrap_or(default.symbol),
            element_type: self.element_type.unwrap_or(default.element_type),
            storage_qualifier: self.storage_qualifier.unwrap_or(default.storage_qualifier),
            values_per_line: self.values_per_line.unwrap_or(default.values_per_line),
            hex_case: self.hex_case.unwrap_or(default.hex_case),
            remove_source: self.remove_source.unwrap_or(default.remove_source),
            intermediates: self.intermediates,
        }
    }
}

/// Configuration for the gamma lookup table header
#[derive(Debug, Clone)]
pub struct GammaConfig {
    /// Curve parameters
    pub params: GammaParams,
    /// Array symbol
    pub symbol: String,
    /// Storage qualifier placed between the type and the symbol
    pub storage_qualifier: Option<String>,
    /// Levels per body line
    pub values_per_line: usize,
    /// Minimum width each level is right-justified to
    pub field_width: usize,
}

impl Default for GammaConfig {
    fn default() -> Self {
        Self {
            params: GammaParams::default(),
            symbol: "gamma8".to_string(),
            storage_qualifier: Some("PROGMEM".to_string()),
            values_per_line: 16,
            field_width: 4,
        }
    }
}

impl GammaConfig {
    pub fn builder() -> GammaConfigBuilder {
        GammaConfigBuilder::default()
    }
}

/// Builder for GammaConfig
#[derive(Default)]
pub struct GammaConfigBuilder {
    gamma: Option<f64>,
    max_in: Option<u32>,
    max_out: Option<u32>,
    symbol: Option<String>,
    storage_qualifier: Option<Option<String>>,
    values_per_line: Option<usize>,
    field_width: Option<usize>,
}

impl GammaConfigBuilder {
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = Some(gamma);
        self
    }

    pub fn max_in(mut self, max_in: u32) -> Self {
        self.max_in = Some(max_in);
        self
    }

    pub fn max_out(mut self, max_out: u32) -> Self {
        self.max_out = Some(max_out);
        self
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn storage_qualifier(mut self, qualifier: Option<String>) -> Self {
        self.storage_qualifier = Some(qualifier);
        self
    }

    pub fn values_per_line(mut self, count: usize) -> Self {
        self.values_per_line = Some(count);
        self
    }

    pub fn field_width(mut self, width: usize) -> Self {
        self.field_width = Some(width);
        self
    }

    pub fn build(self) -> GammaConfig {
        let default = GammaConfig::default();
        GammaConfig {
            params: GammaParams {
                gamma: self.gamma.unwrap_or(default.params.gamma),
                max_in: self.max_in.unwrap_or(default.params.max_in),
                max_out: self.max_out.unwrap_or(default.params.max_out),
            },
            symbol: self.symbol.unwrap_or(default.symbol),
            storage_qualifier: self.storage_qualifier.unwrap_or(default.storage_qualifier),
            values_per_line: self.values_per_line.unwrap_or(default.values_per_line),
            field_width: self.field_width.unwrap_or(default.field_width),
        }
    }
}
