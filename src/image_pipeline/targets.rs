//! Target file set resolution
//!
//! Turns the user-supplied path into the list of files a run rewrites.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::image_pipeline::common::error::{Result, TaggerError};

/// Extensions picked up when the target is a directory. Matched exactly.
pub const TIFF_EXTENSIONS: [&str; 2] = ["tif", "tiff"];

/// Files selected for tagging, in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFileSet {
    root: PathBuf,
    files: Vec<PathBuf>,
}

impl TargetFileSet {
    /// A directory yields its regular files with a TIFF extension, sorted by
    /// path; subdirectories are not descended into. A file yields itself
    /// whatever its extension.
    pub fn resolve<P: AsRef<Path>>(path: P) -> Result<Self> {
        let root = path.as_ref().to_path_buf();
        let metadata = fs::metadata(&root).map_err(|e| match e.kind() {
            ErrorKind::NotFound => TaggerError::TargetNotFound(root.clone()),
            _ => TaggerError::IoError(e),
        })?;

        let files = if metadata.is_dir() {
            let mut files = Vec::new();
            for entry in fs::read_dir(&root)? {
                let candidate = entry?.path();
                if candidate.is_file() && has_tiff_extension(&candidate) {
                    files.push(candidate);
                } else {
                    debug!(path = %candidate.display(), "Skipping entry");
                }
            }
            files.sort();
            files
        } else {
            vec![root.clone()]
        };

        Ok(Self { root, files })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

pub fn has_tiff_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| TIFF_EXTENSIONS.contains(&ext))
}
