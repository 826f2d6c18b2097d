//! Entity identifier value objects.

use super::errors::ValidationError;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A type-safe identifier for contacts.
///
/// Generated once when a contact is created and never changed afterwards.
///
/// # Example
///
/// ```
/// use personal_assistant::domain::ContactId;
///
/// let id = ContactId::generate();
/// let parsed: ContactId = id.to_string().parse().unwrap();
/// assert_eq!(id, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId(Uuid);

/// A type-safe identifier for notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteId(Uuid);

impl ContactId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from its textual form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidId` if `id` is not a UUID.
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        parse_uuid(id).map(Self)
    }
}

impl NoteId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from its textual form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidId` if `id` is not a UUID.
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        parse_uuid(id).map(Self)
    }
}

fn parse_uuid(id: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(id.trim()).map_err(|_| ValidationError::InvalidId(id.to_string()))
}

impl FromStr for ContactId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromStr for NoteId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
