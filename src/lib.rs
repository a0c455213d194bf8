pub mod cli;
pub mod downloader;
pub mod logging;

pub use downloader::{
    format_duration, CliProvider, Downloader, DurationReport, MediaProvider, PlaylistError,
};
