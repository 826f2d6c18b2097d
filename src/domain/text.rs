//! Required text fields: contact names and note bodies.

use super::errors::ValidationError;
use std::fmt;

/// A contact's display name. Never empty, always trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Empty` if the name is blank.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        non_empty(name, "name").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against raw input, ignoring surrounding whitespace.
    pub fn matches_ignore_case(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.trim().to_lowercase()
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The body of a note. Never empty, always trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteText(String);

impl NoteText {
    /// Create a new NoteText.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Empty` if the text is blank.
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        non_empty(text, "text").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn non_empty(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_string())
}
