use crate::error::{HabitError, Result};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Shape check
// ---------------------------------------------------------------------------

static DATE_RE: OnceLock<Regex> = OnceLock::new();

fn date_re() -> &'static Regex {
    DATE_RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
}

/// Structural `YYYY-MM-DD` check. Does not verify the date exists on the
/// calendar; use [`parse_date`] for that.
pub fn is_iso_date(s: &str) -> bool {
    date_re().is_match(s)
}

// ---------------------------------------------------------------------------
// Parsing / formatting
// ---------------------------------------------------------------------------

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| HabitError::InvalidDate(s.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `YYYY-MM-DD` for a (year, month, day) triple, zero-padded. The triple is
/// not range-checked — callers building grid cells stay in valid ranges.
pub fn format_ymd(year: i32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_shape_check() {
        assert!(is_iso_date("2023-10-05"));
        assert!(!is_iso_date("2023-10-5"));
        assert!(!is_iso_date("10/05/2023"));
        assert!(!is_iso_date("not-a-date"));
        // Shape only — a nonsense month still passes.
        assert!(is_iso_date("2023-13-99"));
    }

    #[test]
    fn parse_rejects_nonexistent_dates() {
        assert!(parse_date("2023-10-05").is_ok());
        assert!(parse_date("2023-13-99").is_err());
        assert!(parse_date("2023-02-30").is_err());
    }

    #[test]
    fn format_round_trips() {
        let d = NaiveDate::from_ymd_opt(2023, 10, 5).unwrap();
        assert_eq!(format_date(d), "2023-10-05");
        assert_eq!(parse_date(&format_date(d)).unwrap(), d);
    }

    #[test]
    fn ymd_zero_pads() {
        assert_eq!(format_ymd(2023, 1, 9), "2023-01-09");
        assert_eq!(format_ymd(2023, 12, 31), "2023-12-31");
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2023, 10), 31);
        assert_eq!(days_in_month(2023, 11), 30);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 12), 31);
    }
}
