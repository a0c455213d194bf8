// Media provider trait and its configuration

use async_trait::async_trait;

use super::errors::Result;
use super::models::{AudioDownloadOptions, DownloadOutcome, ExtractionMode, ProviderOutput};
use super::tools::find_ytdlp;

/// Configuration for provider invocations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Executable to run
    pub binary: String,
    /// Timeout for the `--version` check, in seconds
    pub version_timeout_secs: u64,
    /// Timeout for each metadata call, in seconds
    pub extraction_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            binary: find_ytdlp(),
            version_timeout_secs: 10,
            extraction_timeout_secs: 60,
        }
    }
}

impl ProviderConfig {
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn with_version_timeout(mut self, seconds: u64) -> Self {
        self.version_timeout_secs = seconds;
        self
    }

    pub fn with_extraction_timeout(mut self, seconds: u64) -> Self {
        self.extraction_timeout_secs = seconds;
        self
    }
}

/// External media-information provider.
///
/// Metadata calls never return an error: every failure (missing binary,
/// timeout, non-zero exit) is reported as an unsuccessful [`ProviderOutput`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaProvider: Send + Sync {
    /// Name of the provider (for logging)
    fn name(&self) -> &'static str;

    /// Whether the tool answers a version query in time
    async fn is_available(&self) -> bool;

    /// Fetch JSON metadata for `url` in the given mode
    async fn run_extraction(&self, url: &str, mode: ExtractionMode) -> ProviderOutput;

    /// Download every item behind `url` as audio, continuing past per-item
    /// errors
    async fn download_audio(
        &self,
        url: &str,
        options: &AudioDownloadOptions,
    ) -> Result<DownloadOutcome>;
}
