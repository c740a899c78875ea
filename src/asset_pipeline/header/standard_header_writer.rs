use std::io::Write;
use tracing::debug;
use crate::asset_pipeline::common::error::Result;
use crate::asset_pipeline::fragment::SourceFragment;
use crate::asset_pipeline::header::writer::HeaderWriter;

/// Writes the rendered fragment verbatim.
pub struct StandardHeaderWriter;

impl HeaderWriter for StandardHeaderWriter {
    fn write_header(&self, fragment: &SourceFragment, output: &mut dyn Write) -> Result<()> {
        debug!("Writing header: {} lines", fragment.lines().len());

        let text = fragment.render();
        output.write_all(text.as_bytes())?;
        output.flush()?;

        debug!("Header written: {} bytes", text.len());
        Ok(())
    }
}
