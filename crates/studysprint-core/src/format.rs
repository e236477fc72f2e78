//! Duration formatting and validation helpers.
//!
//! Pure functions shared by the timer display, the duration input form
//! and the statistics views.

use crate::error::ValidationError;

/// Longest focus duration a user may configure, in minutes.
pub const MAX_CUSTOM_MINUTES: u32 = 120;

/// Quick-pick focus durations offered next to the free-form input.
pub const PRESET_MINUTES: [u32; 4] = [5, 15, 25, 45];

/// Format seconds as zero-padded `MM:SS`.
///
/// Minutes are not wrapped into hours, so 3661 seconds renders as `61:01`.
pub fn format_time(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

pub fn minutes_to_seconds(minutes: u32) -> u32 {
    minutes.saturating_mul(60)
}

/// Parse raw duration input as a whole number of minutes in `1..=120`.
///
/// Surrounding whitespace is not trimmed.
pub fn parse_minutes(raw: &str) -> Result<u32, ValidationError> {
    match raw.parse::<i64>() {
        Ok(n) if n > 0 && n <= i64::from(MAX_CUSTOM_MINUTES) => Ok(n as u32),
        _ => Err(ValidationError::InvalidDuration {
            input: raw.to_string(),
        }),
    }
}

/// Parse a quick-pick duration; only [`PRESET_MINUTES`] are accepted.
pub fn parse_preset(raw: &str) -> Result<u32, ValidationError> {
    raw.parse::<u32>()
        .ok()
        .filter(|m| PRESET_MINUTES.contains(m))
        .ok_or_else(|| ValidationError::UnknownPreset(raw.to_string()))
}

/// `true` when `raw` is an acceptable focus duration.
pub fn validate_minutes(raw: &str) -> bool {
    parse_minutes(raw).is_ok()
}

/// Compact total used on summary cards: `45 min`, `1h 30m`, `2h`.
pub fn format_total_time(total_minutes: u32) -> String {
    if total_minutes < 60 {
        return format!("{total_minutes} min");
    }
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if minutes > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{hours}h")
    }
}

/// Spelled-out total used on the detailed statistics view.
pub fn format_total_time_long(total_minutes: u32) -> String {
    if total_minutes < 60 {
        return format!("{total_minutes} minutes");
    }
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if minutes > 0 {
        format!("{hours} hours {minutes} minutes")
    } else {
        format!("{hours} hours")
    }
}
