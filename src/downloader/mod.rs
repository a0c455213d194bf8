// Downloader module - playlist metadata, aggregation and audio download

pub mod aggregate;
pub mod errors;
pub mod extractors;
pub mod models;
pub mod orchestrator;
pub mod playlist_url;
pub mod report;
pub mod tools;
pub mod traits;
pub mod utils;

pub use errors::{CommandError, PlaylistError, Result};
pub use extractors::{CliProvider, ExtractionStrategy};
pub use models::{
    AudioDownloadOptions, DownloadOutcome, DurationSummary, ExtractionMode, ExtractionResult,
    ExternalCommandResult, PlaylistItem, ProviderOutput, ViewingProjection,
};
pub use orchestrator::{DownloadJob, Downloader};
pub use report::{format_duration, DurationReport, ReportConfig};
pub use traits::{MediaProvider, ProviderConfig};
