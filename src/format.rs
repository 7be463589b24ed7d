//! Timestamp Rendering
//!
//! The backend emits ISO 8601 strings, sometimes without a timezone
//! offset. Unparseable values fall back to the raw string rather than
//! hiding the row.

use chrono::{DateTime, NaiveDateTime};

fn parse(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// Calendar date for feed headers, e.g. "May 01, 2025"
pub fn format_date(value: &str) -> String {
    match parse(value) {
        Some(dt) => dt.format("%b %d, %Y").to_string(),
        None => value.to_string(),
    }
}

/// Clock time for comments and chat bubbles, e.g. "14:32"
pub fn format_time(value: &str) -> String {
    match parse(value) {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_timestamps() {
        assert_eq!(format_date("2025-05-01T14:32:10+00:00"), "May 01, 2025");
        assert_eq!(format_time("2025-05-01T14:32:10+00:00"), "14:32");
    }

    #[test]
    fn test_naive_timestamps_without_offset() {
        assert_eq!(format_date("2025-05-01T14:32:10.123456"), "May 01, 2025");
        assert_eq!(format_time("2025-05-01T14:32:10"), "14:32");
    }

    #[test]
    fn test_unparseable_value_passes_through() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_time(""), "");
    }
}
