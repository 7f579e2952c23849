use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("No channel map given (use -c/--channels)")]
    ChannelMapMissing,

    #[error("Failed to read channel map {path}: {source}")]
    ChannelMapRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse channel map {path}: {source}")]
    ChannelMapParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Channel map {0} must contain a JSON object")]
    ChannelMapNotObject(PathBuf),

    #[error("Target path does not exist: {0}")]
    TargetNotFound(PathBuf),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode TIFF image: {0}")]
    DecodeError(String),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("{failed} of {total} file(s) could not be tagged")]
    BatchIncomplete { failed: usize, total: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TaggerError {
    /// Errors raised before any target file is opened.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            TaggerError::ChannelMapMissing
                | TaggerError::ChannelMapRead { .. }
                | TaggerError::ChannelMapParse { .. }
                | TaggerError::ChannelMapNotObject(_)
                | TaggerError::TargetNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TaggerError>;
