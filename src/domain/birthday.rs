//! Birthday value object.

use super::errors::ValidationError;
use super::validators::{parse_birthday, parse_birthday_on, DISPLAY_DATE_FORMAT};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Formats accepted when reading a birthday back from storage.
const STORED_FORMATS: [&str; 2] = [DISPLAY_DATE_FORMAT, "%Y-%m-%d"];

/// A contact's date of birth.
///
/// Rendered as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse user input relative to today's date.
    ///
    /// # Errors
    ///
    /// See [`parse_birthday`](super::validators::parse_birthday).
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        parse_birthday(input).map(Self)
    }

    /// Parse user input relative to an explicit reference date.
    pub fn parse_on(input: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        parse_birthday_on(input, today).map(Self)
    }

    /// Read a birthday that was previously persisted.
    ///
    /// Only `DD.MM.YYYY` and `YYYY-MM-DD` are accepted and no plausibility
    /// window is applied, so data that was valid when saved stays loadable.
    pub fn from_stored(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        STORED_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidBirthday {
                value: value.to_string(),
                reason: "Expected format: DD.MM.YYYY or YYYY-MM-DD".to_string(),
            })
    }

    /// Wrap an already-validated date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Get the underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// February 29 maps to February 28 when `year` is not a leap year.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }

    /// The first anniversary falling on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.in_year(today.year())?;
        if this_year >= today {
            Some(this_year)
        } else {
            self.in_year(today.year() + 1)
        }
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_display_format() {
        let birthday = Birthday::parse_on("1990-03-05", date(2024, 1, 1)).unwrap();
        assert_eq!(birthday.to_string(), "05.03.1990");
    }

    #[test]
    fn test_from_stored_skips_plausibility_window() {
        let birthday = Birthday::from_stored("01.01.1800").unwrap();
        assert_eq!(birthday.date(), date(1800, 1, 1));
        assert!(Birthday::from_stored("2000-02-29").is_ok());
        assert!(Birthday::from_stored("02/29/2000").is_err());
    }

    #[test]
    fn test_leap_day_in_non_leap_year() {
        let birthday = Birthday::from_date(date(2000, 2, 29));
        assert_eq!(birthday.in_year(2023), Some(date(2023, 2, 28)));
        assert_eq!(birthday.in_year(2024), Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_next_occurrence_wraps_year() {
        let birthday = Birthday::from_date(date(1990, 1, 2));
        assert_eq!(birthday.next_occurrence(date(2024, 12, 30)), Some(date(2025, 1, 2)));
        assert_eq!(birthday.next_occurrence(date(2024, 1, 2)), Some(date(2024, 1, 2)));
    }
}
