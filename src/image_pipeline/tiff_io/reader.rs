use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::tiff_io::page::TiffPage;

pub trait TiffPageReader {
    fn read_pages(&self, data: &[u8]) -> Result<Vec<TiffPage>>;
}
