//! Image processing pipeline module
//!
//! This module provides a structured approach to tagging TIFF images with a
//! channel map, with separate modules for the channel map, target
//! resolution, TIFF reading/writing, and tagging orchestration.

pub mod channels;
pub mod common;
pub mod tagging;
pub mod targets;
pub mod tiff_io;

pub use common::{
    TaggerError,
    Result,
};

pub use channels::ChannelMap;

pub use targets::TargetFileSet;

pub use tiff_io::{
    FailurePolicy,
    PageLayout,
    PageSamples,
    StandardTiffReader,
    StandardTiffWriter,
    TaggerConfig,
    TaggerConfigBuilder,
    TiffCompression,
    TiffPage,
    TiffPageReader,
    TiffWriter,
    read_description,
};

pub use tagging::{
    FileFailure,
    MetadataTagger,
    TagReport,
};
