use std::io::Write;
use crate::asset_pipeline::common::error::Result;
use crate::asset_pipeline::fragment::SourceFragment;

pub trait HeaderWriter {
    fn write_header(&self, fragment: &SourceFragment, output: &mut dyn Write) -> Result<()>;
}
