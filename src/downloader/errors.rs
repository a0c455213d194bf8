// Error types for the playlist pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias used across the pipeline
pub type Result<T> = std::result::Result<T, PlaylistError>;

/// Errors surfaced to the caller of a pipeline.
///
/// Malformed per-item records never show up here: they are dropped while
/// parsing and only traced.
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// yt-dlp missing or not responding to the version check
    #[error("yt-dlp is not available: {0}")]
    ProviderUnavailable(String),

    /// Neither playlist nor single-item extraction produced usable durations
    #[error("Unable to extract information: {0}")]
    ExtractionFailed(String),

    /// Empty URL or URL without a playlist identifier
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Output directory could not be prepared
    #[error("Cannot create directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PlaylistError {
    /// Hint printed under the error line, if any
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ProviderUnavailable(_) => Some("Install with: pip install yt-dlp"),
            _ => None,
        }
    }
}

/// Low-level failures of a child process invocation.
///
/// The provider adapter collapses all of these into a single unsuccessful
/// call; the variants exist for logging.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to capture {stream} from {program}")]
    Capture {
        program: String,
        stream: &'static str,
    },

    #[error("Failed to wait for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {stream}: {message}")]
    Read {
        stream: &'static str,
        message: String,
    },

    #[error("Timed out after {0}s")]
    TimedOut(u64),
}

impl CommandError {
    /// True when the executable itself could not be found
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Spawn { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
