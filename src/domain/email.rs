//! EmailAddress value object.

use super::errors::ValidationError;
use super::validators::validate_email;
use std::fmt;

/// A validated, normalized email address.
///
/// The stored value is trimmed and lower-cased.
///
/// # Example
///
/// ```
/// use personal_assistant::domain::EmailAddress;
///
/// let email = EmailAddress::new("  Ann@Example.COM ").unwrap();
/// assert_eq!(email.as_str(), "ann@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: &str) -> Result<Self, ValidationError> {
        validate_email(email)?;
        Ok(Self(email.trim().to_lowercase()))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
