// Human-readable duration report

use std::fmt::Write as _;

use super::aggregate::{projections, summarize};
use super::models::{DurationSummary, ExtractionResult, ViewingProjection};

const ZERO_DURATION: &str = "0 seconds";

const UNITS: [(u64, &str, &str); 4] = [
    (86_400, "day", "days"),
    (3_600, "hour", "hours"),
    (60, "minute", "minutes"),
    (1, "second", "seconds"),
];

fn plural(count: u64, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

/// Format seconds as "1 day, 2 hours, 5 seconds", skipping zero components.
pub fn format_duration(total_seconds: u64) -> String {
    if total_seconds == 0 {
        return ZERO_DURATION.to_string();
    }

    let mut remaining = total_seconds;
    let mut parts = Vec::with_capacity(UNITS.len());
    for (unit_seconds, singular, plural_name) in UNITS {
        let count = remaining / unit_seconds;
        remaining %= unit_seconds;
        if count > 0 {
            parts.push(format!("{count} {}", plural(count, singular, plural_name)));
        }
    }

    if parts.is_empty() {
        ZERO_DURATION.to_string()
    } else {
        parts.join(", ")
    }
}

/// Report settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Daily viewing budgets, in hours, to project
    pub daily_hours: Vec<u32>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            daily_hours: vec![1, 2, 3],
        }
    }
}

impl ReportConfig {
    pub fn with_daily_hours(mut self, hours: Vec<u32>) -> Self {
        self.daily_hours = hours;
        self
    }
}

/// Everything shown to the user after a successful extraction
#[derive(Debug, Clone, PartialEq)]
pub struct DurationReport {
    pub summary: DurationSummary,
    pub projections: Vec<ViewingProjection>,
}

impl DurationReport {
    pub fn new(result: &ExtractionResult, config: &ReportConfig) -> Self {
        let summary = summarize(result);
        Self {
            projections: projections(summary.total_seconds, &config.daily_hours),
            summary,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Videos: {}", self.summary.item_count);
        let _ = writeln!(
            out,
            "Total duration: {}",
            format_duration(self.summary.total_seconds)
        );

        if !self.projections.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Time needed:");
            for projection in &self.projections {
                let hours = u64::from(projection.hours_per_day);
                let _ = writeln!(
                    out,
                    "{} {}/day: {:.1} days",
                    projection.hours_per_day,
                    plural(hours, "hour", "hours"),
                    projection.days
                );
            }
        }
        out
    }
}
