//! PhoneNumber value object.

use super::errors::ValidationError;
use super::validators::{format_phone, validate_phone};
use std::fmt;

/// A validated phone number, stored as exactly ten digits.
///
/// Formatting characters (spaces, dashes, parentheses, plus signs) are
/// accepted on input and stripped.
///
/// # Example
///
/// ```
/// use personal_assistant::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(123) 456-7890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// assert_eq!(phone.formatted(), "(123) 456-7890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating and normalizing the input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if ten digits do not remain
    /// after stripping formatting characters.
    pub fn new(phone: &str) -> Result<Self, ValidationError> {
        validate_phone(phone).map(Self)
    }

    /// Get the normalized digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the number formatted for display.
    pub fn formatted(&self) -> String {
        format_phone(&self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}
