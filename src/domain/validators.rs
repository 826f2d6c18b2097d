//! Field validators for contact data.
//!
//! Pure functions that validate and normalize raw user input for email
//! addresses, phone numbers and birthdays. The value objects in this module's
//! siblings build on top of them.

use super::errors::ValidationError;
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Email pattern: local part, `@`, domain, and a 2-6 letter TLD.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$")
        .expect("Failed to compile email regex")
});

/// Number of digits a normalized phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// Oldest plausible birthday, in years before the current year.
pub const MAX_AGE_YEARS: i32 = 150;

/// Birthday input formats, tried in order.
pub const BIRTHDAY_FORMATS: [&str; 4] = ["%d.%m.%Y", "%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"];

/// Display format for birthdays.
pub const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

/// Validate an email address.
///
/// The value is trimmed before matching.
///
/// # Errors
///
/// Returns `ValidationError::InvalidEmail` if the trimmed value does not match
/// `local@domain.tld`.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if EMAIL_REGEX.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(value.to_string()))
    }
}

/// Strip phone formatting characters (whitespace, `-`, `(`, `)`, `+`).
///
/// No validation is performed.
pub fn normalize_phone(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')' | '+')))
        .collect()
}

/// Validate a phone number and return its normalized digits.
///
/// # Errors
///
/// Returns `ValidationError::InvalidPhone` unless exactly ten decimal digits
/// remain after stripping formatting characters.
pub fn validate_phone(value: &str) -> Result<String, ValidationError> {
    let cleaned = normalize_phone(value);
    if cleaned.len() == PHONE_DIGITS && cleaned.chars().all(|c| c.is_ascii_digit()) {
        Ok(cleaned)
    } else {
        Err(ValidationError::InvalidPhone(value.to_string()))
    }
}

/// Format a normalized phone number for display as `(XXX) XXX-XXXX`.
///
/// Values that are not ten digits long are returned unchanged.
pub fn format_phone(digits: &str) -> String {
    if digits.len() == PHONE_DIGITS && digits.is_ascii() {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        digits.to_string()
    }
}

/// Parse a birthday relative to the current local date.
///
/// See [`parse_birthday_on`].
pub fn parse_birthday(value: &str) -> Result<NaiveDate, ValidationError> {
    parse_birthday_on(value, Local::now().date_naive())
}

/// Parse a birthday string, checking it against `today`.
///
/// Formats are tried in the order of [`BIRTHDAY_FORMATS`]; the first one that
/// parses wins, so `01/02/2000` is read as 1 February.
///
/// # Errors
///
/// Returns `ValidationError::InvalidBirthday` when no format matches, when the
/// date lies after `today`, or when it is earlier than 1 January of the year
/// [`MAX_AGE_YEARS`] years ago.
pub fn parse_birthday_on(value: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid_birthday(value, "Birthday must be a non-empty string"));
    }

    let parsed = BIRTHDAY_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| {
            invalid_birthday(
                value,
                "Could not parse date. Supported formats: DD.MM.YYYY, YYYY-MM-DD, DD/MM/YYYY, MM/DD/YYYY",
            )
        })?;

    if parsed > today {
        return Err(invalid_birthday(value, "Birthday cannot be in the future"));
    }

    let min_date = NaiveDate::from_ymd_opt(today.year() - MAX_AGE_YEARS, 1, 1);
    if min_date.is_some_and(|min| parsed < min) {
        return Err(invalid_birthday(
            value,
            &format!("Birthday cannot be more than {} years ago", MAX_AGE_YEARS),
        ));
    }

    Ok(parsed)
}

fn invalid_birthday(value: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidBirthday {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
