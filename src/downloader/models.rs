// Common data models for the playlist pipeline

use std::fmt;
use std::path::PathBuf;

/// One media entry with a usable duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaylistItem {
    pub duration_seconds: u64,
}

impl PlaylistItem {
    pub fn new(duration_seconds: u64) -> Self {
        Self { duration_seconds }
    }
}

/// How the provider is asked for metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractionMode {
    /// Non-recursive playlist listing, one JSON object per line
    #[default]
    PlaylistFlat,
    /// Metadata of a single item, one JSON object for the whole output
    SingleItem,
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlaylistFlat => write!(f, "playlist-flat"),
            Self::SingleItem => write!(f, "single-item"),
        }
    }
}

/// Items produced by one successful extraction. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    mode: ExtractionMode,
    items: Vec<PlaylistItem>,
}

#[allow(clippy::len_without_is_empty)]
impl ExtractionResult {
    /// Returns `None` for an empty item list: an empty extraction is a
    /// failure, not a result.
    pub fn new(mode: ExtractionMode, items: Vec<PlaylistItem>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { mode, items })
        }
    }

    pub fn mode(&self) -> ExtractionMode {
        self.mode
    }

    pub fn items(&self) -> &[PlaylistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Totals over one extraction result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationSummary {
    pub total_seconds: u64,
    pub item_count: usize,
}

/// Days needed to watch everything at a fixed daily budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewingProjection {
    pub hours_per_day: u32,
    pub days: f64,
}

/// Raw outcome of a child process
#[derive(Debug, Clone, Default)]
pub struct ExternalCommandResult {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExternalCommandResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Outcome of one provider metadata call.
///
/// Callers branch on `success` only; `failure` is kept for logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderOutput {
    pub stdout: String,
    pub success: bool,
    pub failure: Option<String>,
}

impl ProviderOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            success: true,
            failure: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            success: false,
            failure: Some(reason.into()),
        }
    }
}

/// Options for the MP3 download command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioDownloadOptions {
    /// yt-dlp format selector
    pub format: String,
    /// Target codec for audio extraction
    pub audio_format: String,
    /// Target bitrate in kbps
    pub audio_quality_kbps: u32,
    /// File name template, relative to `output_dir`
    pub output_template: String,
    pub output_dir: PathBuf,
}

impl Default for AudioDownloadOptions {
    fn default() -> Self {
        Self {
            format: "bestaudio/best".to_string(),
            audio_format: "mp3".to_string(),
            audio_quality_kbps: 192,
            output_template: "%(title)s.%(ext)s".to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl AudioDownloadOptions {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_audio_quality(mut self, kbps: u32) -> Self {
        self.audio_quality_kbps = kbps;
        self
    }

    /// Full output template passed to yt-dlp
    pub fn output_pattern(&self) -> String {
        self.output_dir
            .join(&self.output_template)
            .to_string_lossy()
            .to_string()
    }
}

/// Result of a playlist download run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub output_dir: PathBuf,
    /// Set when yt-dlp exited with an error (ignore-errors mode)
    pub partial: bool,
    /// Files present in `output_dir` after the run
    pub file_count: usize,
}
