use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::tiff_io::page::TiffPage;
use crate::image_pipeline::tiff_io::types::TaggerConfig;

pub trait TiffWriter {
    fn write_tiff(&self, pages: &[TiffPage], description: &str, output: &mut dyn Write, config: &TaggerConfig) -> Result<()>;
}
