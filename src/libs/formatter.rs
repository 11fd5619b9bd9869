//! Formatting helpers shared by every report variant.
//!
//! All durations render as "HH:MM" (minutes truncated, not rounded) unless
//! a report explicitly also emits seconds, as the job-tracking report does.
//! Negative durations render as zero. Missing optional fields always
//! degrade to a neutral placeholder rather than raising an error; the
//! substitution lives in one place here so report variants cannot drift
//! apart.

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Placeholder for a missing value in a report cell.
pub const PLACEHOLDER: &str = "N/A";

/// Placeholder for a missing name (stage, performer, job).
pub const UNKNOWN: &str = "Unknown";

/// Formats a duration as "HH:MM", truncating seconds.
///
/// Negative durations are treated as zero.
///
/// # Examples
///
/// ```rust
/// use worklog::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
/// assert_eq!(format_duration(&(Duration::minutes(8) + Duration::seconds(25))), "00:08");
/// assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    // Clamp negatives to zero so anomalous arithmetic never leaks a "-" out.
    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a duration as "HH:MM:SS" for reports that carry seconds.
pub fn format_duration_secs(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;
    let secs = duration.num_seconds() % 60;
    format!("{:02}:{:02}:{:02}", hours.max(0), mins.max(0), secs.max(0))
}

/// Formats a timestamp's time-of-day as "HH:MM", or [`PLACEHOLDER`] when absent.
pub fn format_time(timestamp: Option<NaiveDateTime>) -> String {
    timestamp.map_or_else(|| PLACEHOLDER.to_string(), |t| t.format("%H:%M").to_string())
}

/// Formats a date as "DD-MM-YYYY", the notation every report emits.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Unwraps an optional string field with a named default.
pub fn or_placeholder(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
