// Metadata extraction through the external provider
//
// - cli: runs the yt-dlp binary
// - parse: JSON output -> playlist items
// - orchestrator: playlist listing with single-item fallback

mod cli;
mod orchestrator;
mod parse;

pub use cli::CliProvider;
pub use orchestrator::ExtractionStrategy;
pub use parse::{parse_playlist_lines, parse_single_item, SingleItemError};
