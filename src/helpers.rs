//! Conversions between close-approach timestamps and their text form.
//!
//! Close-approach times are timezone-naive and interpreted as UTC. The input
//! files use `YYYY-MM-DD HH:MM`; the JPL close-approach API uses a month
//! abbreviation instead (`YYYY-Mon-DD HH:MM`), so both are accepted.

use chrono::{NaiveDateTime, Timelike};

const CD_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%b-%d %H:%M"];

/// Parses a calendar date-time such as `2020-01-01 06:00` or `2020-Jan-01 06:00`.
///
/// Returns `None` when the text matches neither format.
pub fn cd_to_datetime(calendar_date: &str) -> Option<NaiveDateTime> {
    let calendar_date = calendar_date.trim();
    CD_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(calendar_date, fmt).ok())
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM`.
///
/// Seconds are appended (`:SS`) only when they are non-zero, so values that
/// came from the input files format back to exactly the same text.
pub fn datetime_to_str(dt: &NaiveDateTime) -> String {
    if dt.second() == 0 {
        dt.format("%Y-%m-%d %H:%M").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
