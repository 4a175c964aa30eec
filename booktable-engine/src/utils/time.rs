//! Time parsing and formatting helpers
//!
//! Times of day travel as "HH:MM" strings at the API boundary and as
//! minutes since midnight (i32) inside the engine, so grace windows can
//! extend past the day's edges without wrapping.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::core::error::{AppError, AppResult};

/// Parse a calendar date in `YYYY-MM-DD` format
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: '{date}', expected YYYY-MM-DD")))
}

/// Parse a time of day in `HH:MM` format, `None` if malformed
pub fn parse_hhmm(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M").ok()
}

/// Minutes since midnight
#[inline]
pub fn minutes_of_day(time: NaiveTime) -> i32 {
    (time.hour() * 60 + time.minute()) as i32
}

/// Format minutes since midnight as `HH:MM`
///
/// Caller guarantees `0 <= minutes < 1440`.
#[inline]
pub fn format_minutes(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Boundary check for request times: parse or fail with a validation error
pub fn require_hhmm(time: &str, field: &str) -> AppResult<i32> {
    parse_hhmm(time.trim())
        .map(minutes_of_day)
        .ok_or_else(|| AppError::validation(format!("{field} must be an HH:MM time, got '{time}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_round_numbers() {
        assert_eq!(require_hhmm("19:00", "time").unwrap(), 1140);
        assert_eq!(require_hhmm(" 08:30 ", "time").unwrap(), 510);
        assert_eq!(format_minutes(1140), "19:00");
        assert_eq!(format_minutes(510), "08:30");
        assert_eq!(format_minutes(5), "00:05");
    }

    #[test]
    fn rejects_malformed_times() {
        assert!(require_hhmm("25:00", "time").is_err());
        assert!(require_hhmm("19:61", "time").is_err());
        assert!(require_hhmm("7pm", "time").is_err());
        assert!(require_hhmm("", "time").is_err());
        assert!(parse_hhmm("19:00:30").is_none());
    }

    #[test]
    fn parses_dates() {
        let date = parse_date("2025-03-10").unwrap();
        assert_eq!(date.to_string(), "2025-03-10");
        assert!(parse_date("10/03/2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
    }
}
