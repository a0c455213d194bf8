// Pipelines: duration report and playlist MP3 download

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::errors::{PlaylistError, Result};
use super::extractors::ExtractionStrategy;
use super::models::{AudioDownloadOptions, DownloadOutcome};
use super::playlist_url::{extract_playlist_id, output_folder_name};
use super::report::{DurationReport, ReportConfig};
use super::traits::MediaProvider;

/// A validated download request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadJob {
    pub url: String,
    pub playlist_id: String,
    pub output_dir: PathBuf,
}

pub struct Downloader {
    provider: Box<dyn MediaProvider>,
    report_config: ReportConfig,
    audio_options: AudioDownloadOptions,
}

impl Downloader {
    pub fn new(provider: Box<dyn MediaProvider>) -> Self {
        Self {
            provider,
            report_config: ReportConfig::default(),
            audio_options: AudioDownloadOptions::default(),
        }
    }

    pub fn with_report_config(mut self, config: ReportConfig) -> Self {
        self.report_config = config;
        self
    }

    pub fn with_audio_options(mut self, options: AudioDownloadOptions) -> Self {
        self.audio_options = options;
        self
    }

    /// Trimmed URL, or `InvalidInput` when it is empty
    pub fn validate_url<'u>(&self, url: &'u str) -> Result<&'u str> {
        let url = url.trim();
        if url.is_empty() {
            return Err(PlaylistError::InvalidInput("empty URL".to_string()));
        }
        Ok(url)
    }

    /// `ProviderUnavailable` unless the tool answers a version query
    pub async fn check_provider(&self) -> Result<()> {
        if self.provider.is_available().await {
            Ok(())
        } else {
            Err(PlaylistError::ProviderUnavailable(format!(
                "{} did not answer a version check",
                self.provider.name()
            )))
        }
    }

    /// Extract durations and build the report, without the provider check
    pub async fn extract_report(&self, url: &str) -> Result<DurationReport> {
        let url = self.validate_url(url)?;
        let result = ExtractionStrategy::new(self.provider.as_ref())
            .extract(url)
            .await?;
        let report = DurationReport::new(&result, &self.report_config);
        debug!(summary = ?report.summary, "report ready");
        Ok(report)
    }

    /// Check the tool, extract durations and build the report
    pub async fn duration_report(&self, url: &str) -> Result<DurationReport> {
        let url = self.validate_url(url)?;
        self.check_provider().await?;
        self.extract_report(url).await
    }

    /// Validate the URL and create the output directory under `base_dir`.
    /// Makes no external call.
    pub fn prepare_download(&self, url: &str, base_dir: &Path) -> Result<DownloadJob> {
        let url = url.trim();
        let playlist_id = extract_playlist_id(url).ok_or_else(|| {
            PlaylistError::InvalidInput("URL is missing the 'list=' parameter".to_string())
        })?;

        let output_dir = base_dir.join(output_folder_name(playlist_id));
        std::fs::create_dir_all(&output_dir).map_err(|source| PlaylistError::Io {
            path: output_dir.clone(),
            source,
        })?;

        Ok(DownloadJob {
            url: url.to_string(),
            playlist_id: playlist_id.to_string(),
            output_dir,
        })
    }

    pub async fn run_download(&self, job: &DownloadJob) -> Result<DownloadOutcome> {
        info!(playlist_id = %job.playlist_id, "downloading playlist audio");
        let options = self
            .audio_options
            .clone()
            .with_output_dir(job.output_dir.clone());
        self.provider.download_audio(&job.url, &options).await
    }

    pub async fn download_playlist_mp3(
        &self,
        url: &str,
        base_dir: &Path,
    ) -> Result<DownloadOutcome> {
        let job = self.prepare_download(url, base_dir)?;
        self.run_download(&job).await
    }
}
