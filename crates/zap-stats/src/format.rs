//! Display formatting for metric values.
//!
//! Payloads are stored verbatim and only shaped here, at render time. The
//! fixed-width policy trades precision for alignment: a value is shown with
//! as many decimals as fit, then scaled to millions, then to billions.

use std::time::Duration;

use crate::store::MISSING;

/// Column width of one load value.
pub const LOAD_COLUMN_WIDTH: usize = 6;

/// Marker shown in place of a value that is long and not a number.
pub const ERROR_MARKER: &str = "#err";

const PRECISIONS: [usize; 3] = [2, 1, 0];
const UNIT_SUFFIX_WIDTH: usize = 2; // " M"
const MILLION: f64 = 1_000_000.0;
const BILLION: f64 = 1_000_000_000.0;

/// Render `raw` right-aligned in [`LOAD_COLUMN_WIDTH`] columns.
pub fn fixed_width(raw: &str) -> String {
    fixed_width_in(raw, LOAD_COLUMN_WIDTH)
}

/// Render `raw` right-aligned in `width` columns.
///
/// Short values and the missing sentinel are kept verbatim. Longer values are
/// parsed as a float and rounded to 2, 1 or 0 decimals, whichever is the
/// most precise that fits. If none fits, the value is shown in millions with
/// a `" M"` suffix, and failing that in billions with a `" B"` suffix (which
/// may overflow the column).
pub fn fixed_width_in(raw: &str, width: usize) -> String {
    if raw == MISSING || raw.chars().count() < width {
        return format!("{raw:>width$}");
    }

    let Ok(value) = raw.parse::<f64>() else {
        return format!("{ERROR_MARKER:>width$}");
    };

    if let Some(text) = fit(value, width) {
        return format!("{text:>width$}");
    }

    let scaled_width = width.saturating_sub(UNIT_SUFFIX_WIDTH);
    if let Some(text) = fit(value / MILLION, scaled_width) {
        return format!("{text:>scaled_width$} M");
    }

    format!("{} B", round_half_away(value / BILLION, 2))
}

/// Most precise rendering of `value` no longer than `width`.
fn fit(value: f64, width: usize) -> Option<String> {
    PRECISIONS
        .into_iter()
        .map(|precision| round_half_away(value, precision))
        .find(|text| text.len() <= width)
}

/// Format with `precision` decimals, breaking exact ties away from zero.
fn round_half_away(value: f64, precision: usize) -> String {
    let scale = 10f64.powi(precision as i32);
    let scaled = value * scale;
    if scaled.is_finite() && scaled.fract().abs() == 0.5 {
        let rounded = scaled.round() / scale;
        return format!("{rounded:.precision$}");
    }
    format!("{value:.precision$}")
}

/// Convert a broker uptime of the form `"<n> seconds"` into `XhYmZs`.
///
/// Anything else (the missing sentinel, another unit, a zero or negative
/// count) is returned unchanged.
pub fn uptime_to_duration(raw: &str) -> String {
    let mut parts = raw.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(count), Some("seconds"), None) => match count.parse::<u64>() {
            Ok(seconds) if seconds > 0 => format_duration(Duration::from_secs(seconds)),
            _ => raw.to_string(),
        },
        _ => raw.to_string(),
    }
}

/// Compact duration: `27h46m40s`, `16m40s`, `10s`.
///
/// Leading zero units are dropped, inner ones are kept (`1h0m5s`).
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Elapsed watch time as `HHH:MM:SS`, hours right-aligned in three columns.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:>3}:{minutes:02}:{seconds:02}")
}
