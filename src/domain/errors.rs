//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Every variant knows which field it belongs to, see [`ValidationError::field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty after trimming.
    Empty { field: &'static str },

    /// The provided identifier is not a valid UUID.
    InvalidId(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided birthday could not be parsed or is implausible.
    InvalidBirthday { value: String, reason: String },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } => field,
            Self::InvalidId(_) => "id",
            Self::InvalidEmail(_) => "email",
            Self::InvalidPhone(_) => "phone",
            Self::InvalidBirthday { .. } => "birthday",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", capitalize(field)),
            Self::InvalidId(id) => write!(f, "Invalid id: '{}'", id),
            Self::InvalidEmail(email) => write!(
                f,
                "Invalid email format: '{}'. Expected format: user@domain.com",
                email
            ),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone format: '{}'. Expected format: 10 digits (e.g., 1234567890)",
                phone
            ),
            Self::InvalidBirthday { value, reason } => {
                write!(f, "Invalid birthday: '{}'. {}", value, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
