// Totals and viewing projections

use super::models::{DurationSummary, ExtractionResult, PlaylistItem, ViewingProjection};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Sum of all item durations
pub fn total_seconds(items: &[PlaylistItem]) -> u64 {
    items
        .iter()
        .fold(0u64, |acc, item| acc.saturating_add(item.duration_seconds))
}

/// Days needed at `hours_per_day` hours of viewing per day; `0.0` when the
/// budget is zero. Not rounded.
pub fn viewing_days(total_seconds: u64, hours_per_day: u32) -> f64 {
    if hours_per_day == 0 {
        return 0.0;
    }
    (total_seconds as f64 / SECONDS_PER_HOUR) / f64::from(hours_per_day)
}

pub fn summarize(result: &ExtractionResult) -> DurationSummary {
    DurationSummary {
        total_seconds: total_seconds(result.items()),
        item_count: result.len(),
    }
}

pub fn projections(total_seconds: u64, daily_hours: &[u32]) -> Vec<ViewingProjection> {
    daily_hours
        .iter()
        .map(|&hours_per_day| ViewingProjection {
            hours_per_day,
            days: viewing_days(total_seconds, hours_per_day),
        })
        .collect()
}
