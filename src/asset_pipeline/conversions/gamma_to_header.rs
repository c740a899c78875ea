use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::asset_pipeline::{
    common::{error::Result, fs::write_atomically},
    fragment::{emit_gamma_table, GammaTable, SourceFragment},
    header::{GammaConfig, HeaderWriter, StandardHeaderWriter},
};

/// Generates the gamma-correction lookup table header.
///
/// The result is meant to be copied into the light driver's sources by hand.
pub struct GammaTablePipeline<W: HeaderWriter> {
    writer: W,
    config: GammaConfig,
}

impl GammaTablePipeline<StandardHeaderWriter> {
    pub fn new(config: GammaConfig) -> Self {
        Self {
            writer: StandardHeaderWriter,
            config,
        }
    }
}

impl<W: HeaderWriter> GammaTablePipeline<W> {
    pub fn with_custom(writer: W, config: GammaConfig) -> Self {
        Self { writer, config }
    }

    fn render(&self) -> Result<SourceFragment> {
        let table = {
            let _span = tracing::info_span!(
                "compute_table",
                gamma = self.config.params.gamma,
                max_in = self.config.params.max_in,
                max_out = self.config.params.max_out
            )
            .entered();
            GammaTable::compute(self.config.params)?
        };

        let _span = tracing::info_span!("emit_gamma_table").entered();
        emit_gamma_table(&table, &self.config)
    }

    #[instrument(skip(self, output))]
    pub fn generate(&self, output: &mut dyn Write) -> Result<()> {
        let fragment = self.render()?;
        self.writer.write_header(&fragment, output)?;

        info!(gamma = self.config.params.gamma, "Gamma table generated");
        Ok(())
    }

    #[instrument(skip(self, output_path))]
    pub fn generate_file<P: AsRef<Path>>(&self, output_path: P) -> Result<()> {
        let output_path = output_path.as_ref();
        let fragment = self.render()?;

        write_atomically(output_path, |output| {
            self.writer.write_header(&fragment, output)
        })?;

        info!(
            output = %output_path.display(),
            gamma = self.config.params.gamma,
            "Gamma table written"
        );
        Ok(())
    }

    pub fn config(&self) -> &GammaConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GammaConfig) {
        self.config = config;
    }
}
