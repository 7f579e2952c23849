//! Tagging orchestration module
//!
//! Ties the channel map, target resolution and TIFF re-encoding together.

mod metadata_tagger;
mod report;


pub use metadata_tagger::MetadataTagger;
pub use report::{FileFailure, TagReport};
