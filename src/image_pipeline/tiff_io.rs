//! TIFF reading and writing module
//!
//! Decodes every page of a TIFF container into owned sample buffers and
//! re-encodes them with a description tag, with various compression options.

mod page;
mod planar;
mod reader;
mod standard_tiff_reader;
mod standard_tiff_writer;
pub mod types;
mod writer;

pub use page::{PageLayout, PageSamples, TiffPage};
pub use reader::TiffPageReader;
pub use standard_tiff_reader::{StandardTiffReader, read_description};
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{FailurePolicy, TaggerConfig, TaggerConfigBuilder, TiffCompression};
pub use writer::TiffWriter;
