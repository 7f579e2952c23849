use std::path::PathBuf;

use crate::image_pipeline::common::error::{Result, TaggerError};

/// A file that could not be tagged, with the reason.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: TaggerError,
}

/// Outcome of one tagging run.
#[derive(Debug, Default)]
pub struct TagReport {
    tagged: Vec<PathBuf>,
    failed: Vec<FileFailure>,
}

impl TagReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_tagged(&mut self, path: impl Into<PathBuf>) {
        self.tagged.push(path.into());
    }

    pub fn record_failure(&mut self, path: impl Into<PathBuf>, error: TaggerError) {
        self.failed.push(FileFailure {
            path: path.into(),
            error,
        });
    }

    pub fn tagged(&self) -> &[PathBuf] {
        &self.tagged
    }

    pub fn failed(&self) -> &[FileFailure] {
        &self.failed
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Turns a run with any failed file into [`TaggerError::BatchIncomplete`].
    pub fn ensure_success(&self) -> Result<()> {
        if self.is_success() {
            return Ok(());
        }
        Err(TaggerError::BatchIncomplete {
            failed: self.failed.len(),
            total: self.failed.len() + self.tagged.len(),
        })
    }
}
