use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::asset_pipeline::{
    common::{
        error::{AssetError, Result},
        fs::{remove_if_present, write_atomically},
    },
    conversions::timing::{PipelineTimings, Timer},
    fragment::{emit_byte_array, SourceFragment},
    header::{EmbedConfig, HeaderWriter, StandardHeaderWriter},
};

/// Embeds a binary blob (the gzipped web UI) as a C byte array header.
pub struct BlobToHeaderPipeline<W: HeaderWriter> {
    writer: W,
    config: EmbedConfig,
}

impl BlobToHeaderPipeline<StandardHeaderWriter> {
    pub fn new(config: EmbedConfig) -> Self {
        Self {
            writer: StandardHeaderWriter,
            config,
        }
    }
}

impl<W: HeaderWriter> BlobToHeaderPipeline<W> {
    pub fn with_custom(writer: W, config: EmbedConfig) -> Self {
        Self { writer, config }
    }

    fn emit(&self, blob: &[u8], timings: &mut PipelineTimings) -> Result<SourceFragment> {
        let _span = tracing::info_span!("emit_byte_array", symbol = %self.config.symbol).entered();
        let timer = Timer::start("emit_byte_array");
        let fragment = emit_byte_array(blob, &self.config)?;
        timer.record(timings);
        Ok(fragment)
    }

    pub fn convert(&self, blob: &[u8], output: &mut dyn Write) -> Result<()> {
        self.convert_with_timings(blob, output).map(|_| ())
    }

    #[instrument(skip(self, blob, output), fields(blob_size = blob.len()))]
    pub fn convert_with_timings(
        &self,
        blob: &[u8],
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        let fragment = self.emit(blob, &mut timings)?;

        {
            let _span = tracing::info_span!("write_header").entered();
            let timer = Timer::start("write_header");
            self.writer.write_header(&fragment, output)?;
            timer.record(&mut timings);
        }

        info!(
            bytes = blob.len(),
            lines = fragment.lines().len(),
            "Byte array emitted"
        );
        Ok(timings)
    }

    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        self.convert_file_with_timings(input_path, output_path)
            .map(|_| ())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file_with_timings<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Embedding blob"
        );

        let timer = Timer::start("read_input_file");
        let blob = std::fs::read(input_path).map_err(|e| {
            AssetError::InputReadError(format!("{}: {}", input_path.display(), e))
        })?;
        timer.record(&mut timings);

        let fragment = self.emit(&blob, &mut timings)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            let timer = Timer::start("write_output_file");
            write_atomically(output_path, |output| {
                self.writer.write_header(&fragment, output)
            })?;
            timer.record(&mut timings);
        }

        let timer = Timer::start("remove_intermediates");
        self.remove_intermediates(input_path)?;
        timer.record(&mut timings);

        info!(
            bytes = blob.len(),
            output = %output_path.display(),
            "Header written"
        );
        Ok(timings)
    }

    fn remove_intermediates(&self, input_path: &Path) -> Result<()> {
        if self.config.remove_source {
            remove_if_present(input_path)?;
        }
        for path in &self.config.intermediates {
            remove_if_present(path)?;
        }
        Ok(())
    }

    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EmbedConfig) {
        self.config = config;
    }
}
