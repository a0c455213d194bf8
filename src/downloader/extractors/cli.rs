// CLI provider - runs the native `yt-dlp` binary
//
// Metadata calls capture stdout under a timeout; the audio download streams
// yt-dlp's own progress output to the terminal and has no timeout.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::downloader::errors::{PlaylistError, Result};
use crate::downloader::models::{
    AudioDownloadOptions, DownloadOutcome, ExtractionMode, ProviderOutput,
};
use crate::downloader::traits::{MediaProvider, ProviderConfig};
use crate::downloader::utils::{count_files, run_output_with_timeout, run_streaming};

/// Provider backed by the yt-dlp command line tool
pub struct CliProvider {
    config: ProviderConfig,
}

impl CliProvider {
    pub fn new() -> Self {
        Self::with_config(ProviderConfig::default())
    }

    pub fn with_config(config: ProviderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Build metadata command arguments
    pub fn build_args(url: &str, mode: ExtractionMode) -> Vec<String> {
        let flags: &[&str] = match mode {
            ExtractionMode::PlaylistFlat => &["--flat-playlist", "--dump-json", "--no-warnings"],
            ExtractionMode::SingleItem => &["--dump-json", "--no-download", "--no-warnings"],
        };

        let mut args: Vec<String> = flags.iter().map(|s| s.to_string()).collect();
        args.push(url.to_string());
        args
    }

    /// Build download-and-transcode arguments
    pub fn build_download_args(url: &str, options: &AudioDownloadOptions) -> Vec<String> {
        vec![
            "--format".to_string(),
            options.format.clone(),
            "--output".to_string(),
            options.output_pattern(),
            "--extract-audio".to_string(),
            "--audio-format".to_string(),
            options.audio_format.clone(),
            "--audio-quality".to_string(),
            format!("{}K", options.audio_quality_kbps),
            "--yes-playlist".to_string(),
            "--ignore-errors".to_string(),
            url.to_string(),
        ]
    }
}

impl Default for CliProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaProvider for CliProvider {
    fn name(&self) -> &'static str {
        "cli-yt-dlp"
    }

    async fn is_available(&self) -> bool {
        let args = vec!["--version".to_string()];
        match run_output_with_timeout(&self.config.binary, &args, self.config.version_timeout_secs)
            .await
        {
            Ok(out) if out.success() => {
                debug!(version = %out.stdout.trim(), "yt-dlp available");
                true
            }
            Ok(out) => {
                warn!(exit_code = ?out.exit_code, "yt-dlp --version failed");
                false
            }
            Err(e) => {
                warn!(binary = %self.config.binary, error = %e, "yt-dlp not usable");
                false
            }
        }
    }

    async fn run_extraction(&self, url: &str, mode: ExtractionMode) -> ProviderOutput {
        let args = Self::build_args(url, mode);
        debug!(%mode, "running {} {}", self.config.binary, args.join(" "));

        match run_output_with_timeout(&self.config.binary, &args, self.config.extraction_timeout_secs)
            .await
        {
            Ok(out) if out.success() => ProviderOutput::ok(out.stdout),
            Ok(out) => {
                let stderr = out.stderr.trim();
                debug!(%mode, exit_code = ?out.exit_code, %stderr, "extraction call failed");
                ProviderOutput::failed(format!(
                    "exit code {}: {}",
                    out.exit_code.map_or_else(|| "none".to_string(), |c| c.to_string()),
                    stderr
                ))
            }
            Err(e) => {
                debug!(%mode, error = %e, "extraction call failed");
                ProviderOutput::failed(e.to_string())
            }
        }
    }

    async fn download_audio(
        &self,
        url: &str,
        options: &AudioDownloadOptions,
    ) -> Result<DownloadOutcome> {
        let args = Self::build_download_args(url, options);
        info!(output_dir = %options.output_dir.display(), "starting audio download");

        let exit_code = run_streaming(&self.config.binary, &args)
            .await
            .map_err(|e| PlaylistError::ProviderUnavailable(e.to_string()))?;

        let partial = exit_code != Some(0);
        let file_count = count_files(&options.output_dir);
        if partial {
            warn!(exit_code = ?exit_code, file_count, "yt-dlp reported errors");
        }

        Ok(DownloadOutcome {
            output_dir: options.output_dir.clone(),
            partial,
            file_count,
        })
    }
}
