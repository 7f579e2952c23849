//! Tagging configuration types

/// TIFF compression methods used when re-encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    #[default]
    None,
    /// LZW compression
    Lzw,
    /// Deflate compression, balanced level
    Deflate,
    /// PackBits run-length compression
    Packbits,
}

/// What to do when a single file of a batch cannot be tagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log the failure, record it in the report and move on to the next file
    #[default]
    Continue,
    /// Stop the batch and return the first failure
    Abort,
}

/// Configuration for tagging TIFF files
#[derive(Debug, Clone, Default)]
pub struct TaggerConfig {
    /// Compression method to use for the rewritten file
    pub compression: TiffCompression,
    /// Predictor value for compression (2 for horizontal differencing)
    pub predictor: Option<u16>,
    /// Per-file failure handling for directory runs
    pub failure_policy: FailurePolicy,
}

impl TaggerConfig {
    pub fn builder() -> TaggerConfigBuilder {
        TaggerConfigBuilder::default()
    }
}

/// Builder for TaggerConfig
#[derive(Default)]
pub struct TaggerConfigBuilder {
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    failure_policy: Option<FailurePolicy>,
}

impl TaggerConfigBuilder {
    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = Some(policy);
        self
    }

    pub fn build(self) -> TaggerConfig {
        let default = TaggerConfig::default();
        TaggerConfig {
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            failure_policy: self.failure_policy.unwrap_or(default.failure_policy),
        }
    }
}
