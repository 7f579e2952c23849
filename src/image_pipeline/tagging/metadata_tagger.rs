use tracing::{debug, error, info, instrument};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::image_pipeline::{
    channels::ChannelMap,
    common::error::{TaggerError, Result},
    tagging::TagReport,
    targets::TargetFileSet,
    tiff_io::{
        FailurePolicy, StandardTiffReader, StandardTiffWriter, TaggerConfig, TiffPageReader,
        TiffWriter,
    },
};

/// Writes a channel map into the description of TIFF files, in place.
pub struct MetadataTagger<R: TiffPageReader, W: TiffWriter> {
    reader: R,
    writer: W,
    config: TaggerConfig,
}

impl MetadataTagger<StandardTiffReader, StandardTiffWriter> {
    pub fn new(config: TaggerConfig) -> Self {
        Self {
            reader: StandardTiffReader,
            writer: StandardTiffWriter,
            config,
        }
    }
}

impl<R: TiffPageReader, W: TiffWriter> MetadataTagger<R, W> {
    pub fn with_custom(reader: R, writer: W, config: TaggerConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Full run: `target` defaults to the current directory, `channels` is the
    /// JSON channel map document.
    ///
    /// Configuration problems (no or malformed channel map, missing target)
    /// fail before any file is opened. Per-file failures follow the
    /// configured [`FailurePolicy`].
    #[instrument(skip(self, target, channels))]
    pub fn tag(&self, target: Option<&Path>, channels: Option<&Path>) -> Result<TagReport> {
        let target = resolve_target_path(target)?;
        info!(target = %target.display(), "Resolved target path");

        let channels = channels.ok_or(TaggerError::ChannelMapMissing)?;
        let channel_map = ChannelMap::load(channels)?;
        info!(
            source = %channels.display(),
            channels = channel_map.len(),
            "Loaded channel map"
        );

        let targets = TargetFileSet::resolve(&target)?;
        self.tag_files(&targets, &channel_map)
    }

    /// Tags every file of `targets` sequentially.
    pub fn tag_files(&self, targets: &TargetFileSet, channel_map: &ChannelMap) -> Result<TagReport> {
        let description = channel_map.to_description()?;
        info!(
            target = %targets.root().display(),
            files = targets.len(),
            "Tagging target files"
        );

        let mut report = TagReport::new();
        for path in targets.files() {
            match self.tag_file_with_description(path, &description) {
                Ok(()) => report.record_tagged(path),
                Err(e) => match self.config.failure_policy {
                    FailurePolicy::Abort => return Err(e),
                    FailurePolicy::Continue => {
                        error!(path = %path.display(), "Tagging failed: {}", e);
                        report.record_failure(path, e);
                    }
                },
            }
        }

        info!(
            tagged = report.tagged().len(),
            failed = report.failed().len(),
            "Tagging complete"
        );
        Ok(report)
    }

    /// Rewrites one file in place with `channel_map` as its description.
    pub fn tag_file<P: AsRef<Path>>(&self, path: P, channel_map: &ChannelMap) -> Result<()> {
        let description = channel_map.to_description()?;
        self.tag_file_with_description(path.as_ref(), &description)
    }

    /// Decodes `input_data` and writes it to `output` with `description`
    /// attached. Samples pass through untouched.
    #[instrument(skip(self, input_data, description, output), fields(input_size = input_data.len()))]
    pub fn retag(&self, input_data: &[u8], description: &str, output: &mut dyn Write) -> Result<()> {
        let pages = {
            let _span = tracing::info_span!("decode_tiff").entered();
            self.reader.read_pages(input_data)?
        };

        {
            let _span = tracing::info_span!("encode_tiff", pages = pages.len()).entered();
            self.writer.write_tiff(&pages, description, output, &self.config)?;
        }

        debug!(pages = pages.len(), "Retag complete");
        Ok(())
    }

    #[instrument(skip(self, path, description), fields(path = %path.display()))]
    fn tag_file_with_description(&self, path: &Path, description: &str) -> Result<()> {
        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(path).map_err(|e| {
                TaggerError::InputReadError(format!("{}: {}", path.display(), e))
            })?
        };

        // encoded fully in memory so a failure never truncates the original
        let mut output = Vec::with_capacity(input_data.len());
        self.retag(&input_data, description, &mut output)?;
        drop(input_data);

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(path, &output).map_err(|e| {
                TaggerError::OutputWriteError(format!("{}: {}", path.display(), e))
            })?;
        }

        info!(path = %path.display(), "Tagged file");
        Ok(())
    }

    pub fn config(&self) -> &TaggerConfig {
        &self.config
    }
}

fn resolve_target_path(target: Option<&Path>) -> Result<PathBuf> {
    match target {
        Some(path) => Ok(std::path::absolute(path)?),
        None => Ok(std::env::current_dir()?),
    }
}
