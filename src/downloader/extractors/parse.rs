// Parsing yt-dlp JSON output into playlist items
//
// yt-dlp records are loosely structured; only `duration` matters here. It is
// coerced once, at this boundary, and everything downstream sees plain
// `PlaylistItem`s.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::trace;

use crate::downloader::models::PlaylistItem;

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    duration: Option<Value>,
}

/// Why a single-item output was rejected
#[derive(Debug, Error)]
pub enum SingleItemError {
    #[error("malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("output is not a JSON object")]
    NotAnObject,

    #[error("no usable duration")]
    MissingDuration,
}

/// Accept only positive JSON numbers; fractional seconds are truncated.
fn coerce_duration(value: &Value) -> Option<u64> {
    let Value::Number(n) = value else {
        return None;
    };

    if let Some(secs) = n.as_u64() {
        return (secs > 0).then_some(secs);
    }

    n.as_f64()
        .filter(|secs| secs.is_finite() && *secs > 0.0)
        .map(|secs| secs as u64)
}

fn entry_from_value(value: Value) -> Option<RawEntry> {
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value).ok()
}

fn item_from_entry(entry: &RawEntry) -> Option<PlaylistItem> {
    entry
        .duration
        .as_ref()
        .and_then(coerce_duration)
        .map(PlaylistItem::new)
}

/// Parse JSON-lines output of a flat playlist listing.
///
/// Blank lines, lines that are not JSON objects and entries without a usable
/// duration are skipped; the rest keep their order.
pub fn parse_playlist_lines(stdout: &str) -> Vec<PlaylistItem> {
    stdout
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| {
            let Some(entry) = serde_json::from_str::<Value>(line.trim())
                .ok()
                .and_then(entry_from_value)
            else {
                trace!(line = index + 1, "skipping malformed record");
                return None;
            };

            let item = item_from_entry(&entry);
            if item.is_none() {
                trace!(line = index + 1, "skipping entry without duration");
            }
            item
        })
        .collect()
}

/// Parse the output of a single-item dump. The whole output must be one JSON
/// object.
pub fn parse_single_item(stdout: &str) -> Result<PlaylistItem, SingleItemError> {
    let value: Value = serde_json::from_str(stdout.trim())?;
    let entry = entry_from_value(value).ok_or(SingleItemError::NotAnObject)?;
    item_from_entry(&entry).ok_or(SingleItemError::MissingDuration)
}
