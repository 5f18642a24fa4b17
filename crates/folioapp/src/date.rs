//! # Dates
//!
//! Content dates are calendar days without a time component. Stored JSON always uses
//! ISO `YYYY-MM-DD`; older files and hand-typed input may use the long form
//! `March 5, 2024` (abbreviated month names are accepted too).
//!
//! [`parse`] and [`format`] are the only conversion points between text and [`Date`].

use crate::error::{FolioError, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const ISO_FORMAT: &str = "%Y-%m-%d";
const LONG_PARSE_FORMAT: &str = "%B %d, %Y";
const LONG_DISPLAY_FORMAT: &str = "%B %-d, %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The current day in the local timezone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// ISO `YYYY-MM-DD`, the storage form.
    pub fn to_iso(&self) -> String {
        self.0.format(ISO_FORMAT).to_string()
    }
}

/// Parses either `YYYY-MM-DD` or `Month D, YYYY`.
pub fn parse(input: &str) -> Result<Date> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, ISO_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, LONG_PARSE_FORMAT))
        .map(Date)
        .map_err(|_| {
            FolioError::validation(format!(
                "unrecognized date `{}` (expected YYYY-MM-DD or Month D, YYYY)",
                trimmed
            ))
        })
}

/// Human-facing long form, e.g. `March 5, 2024`.
pub fn format(date: Date) -> String {
    date.0.format(LONG_DISPLAY_FORMAT).to_string()
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso())
    }
}

impl FromStr for Date {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso() {
        assert_eq!(parse("2024-03-05").unwrap(), ymd(2024, 3, 5));
    }

    #[test]
    fn parses_long_form() {
        assert_eq!(parse("March 5, 2024").unwrap(), ymd(2024, 3, 5));
        assert_eq!(parse("December 25, 2023").unwrap(), ymd(2023, 12, 25));
    }

    #[test]
    fn parses_abbreviated_month() {
        assert_eq!(parse("Mar 5, 2024").unwrap(), ymd(2024, 3, 5));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse("  2024-01-02\n").unwrap(), ymd(2024, 1, 2));
    }

    #[test]
    fn rejects_garbage() {
        let err = parse("yesterday").unwrap_err();
        assert!(err.is_validation());
        assert!(parse("2024-02-30").is_err());
    }

    #[test]
    fn formats_long_form_without_padding() {
        assert_eq!(format(ymd(2024, 3, 5)), "March 5, 2024");
    }

    #[test]
    fn format_then_parse_is_identity() {
        let date = ymd(2021, 11, 9);
        assert_eq!(parse(&format(date)).unwrap(), date);
    }

    #[test]
    fn serializes_as_iso_and_reads_both_forms() {
        let date = ymd(2022, 7, 14);
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2022-07-14\"");

        let legacy: Date = serde_json::from_str("\"July 14, 2022\"").unwrap();
        assert_eq!(legacy, date);
    }

    #[test]
    fn orders_chronologically() {
        assert!(ymd(2020, 1, 1) < ymd(2020, 1, 2));
    }
}
