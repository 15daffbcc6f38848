//! Canonical-date handling
//!
//! Dataset dates travel as `YYYY-MM-DD` strings. That form is kept as
//! the working representation because it sorts and compares
//! lexicographically in calendar order; [`chrono::NaiveDate`] appears
//! only at the edges, for parsing user input and formatting labels.
//!
//! No clock lives here. Callers supply "today" so the window logic
//! stays testable off the browser.

use chrono::{Days, NaiveDate};

/// Canonical dataset date format.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Days shown by the default gallery window, inclusive of today.
pub const DEFAULT_WINDOW_DAYS: u64 = 9;

/// Formats a date in the canonical `YYYY-MM-DD` form.
pub fn to_canonical(date: NaiveDate) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}

/// Parses a canonical `YYYY-MM-DD` string. Returns `None` for anything
/// that is not a real calendar day.
pub fn parse_canonical(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, CANONICAL_FORMAT).ok()
}

/// Human-readable label for a canonical date, e.g. `"April 16, 2025"`.
///
/// Malformed input comes back unchanged: a bad date in one record
/// should show up as-is in that card rather than take down the view.
pub fn format_human(value: &str) -> String {
    match parse_canonical(value) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

/// Short `MM/DD/YYYY` form used for input placeholders.
pub fn format_short(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// First day of the default window ending at `today`.
pub fn default_range_start(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_days(Days::new(DEFAULT_WINDOW_DAYS - 1))
        .unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn test_to_canonical_pads() {
        assert_eq!(to_canonical(date(2025, 4, 6)), "2025-04-06");
        assert_eq!(to_canonical(date(2025, 12, 31)), "2025-12-31");
    }

    #[test]
    fn test_parse_canonical_roundtrip() {
        for value in ["2025-01-01", "2025-04-16", "2024-02-29", "1999-12-31"] {
            let parsed = parse_canonical(value).expect("parseable date");
            assert_eq!(to_canonical(parsed), value);
        }
    }

    #[test]
    fn test_parse_canonical_rejects_garbage() {
        assert_eq!(parse_canonical(""), None);
        assert_eq!(parse_canonical("not-a-date"), None);
        assert_eq!(parse_canonical("2025-13-01"), None);
        assert_eq!(parse_canonical("2025-02-30"), None);
        // non-leap year
        assert_eq!(parse_canonical("2025-02-29"), None);
    }

    #[test]
    fn test_parse_canonical_normalizes_unpadded() {
        // chrono accepts unpadded components; canonical output re-pads
        let parsed = parse_canonical("2025-4-6").expect("parseable date");
        assert_eq!(to_canonical(parsed), "2025-04-06");
    }

    #[test]
    fn test_format_human() {
        assert_eq!(format_human("2025-04-16"), "April 16, 2025");
        assert_eq!(format_human("2025-01-01"), "January 1, 2025");
        assert_eq!(format_human("2024-12-09"), "December 9, 2024");
    }

    #[test]
    fn test_format_human_passes_malformed_through() {
        assert_eq!(format_human(""), "");
        assert_eq!(format_human("someday"), "someday");
        assert_eq!(format_human("2025-02-30"), "2025-02-30");
    }

    #[test]
    fn test_format_short() {
        assert_eq!(format_short(date(2025, 4, 6)), "04/06/2025");
        assert_eq!(format_short(date(2025, 12, 31)), "12/31/2025");
    }

    #[test]
    fn test_default_range_start() {
        // nine days inclusive: today minus eight
        assert_eq!(default_range_start(date(2025, 6, 15)), date(2025, 6, 7));
    }

    #[test]
    fn test_default_range_start_crosses_month() {
        assert_eq!(default_range_start(date(2025, 5, 3)), date(2025, 4, 25));
    }

    #[test]
    fn test_default_range_start_crosses_year() {
        assert_eq!(default_range_start(date(2025, 1, 4)), date(2024, 12, 27));
    }

    #[test]
    fn test_default_range_start_leap_february() {
        assert_eq!(default_range_start(date(2024, 3, 5)), date(2024, 2, 26));
    }
}
