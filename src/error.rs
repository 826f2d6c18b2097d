//! Error types for the personal assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by the contact, note, birthday and search services.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact with the given id
    #[error("Contact not found: '{0}'")]
    ContactNotFound(String),

    /// No note with the given id
    #[error("Note with id {0} not found")]
    NoteNotFound(String),

    /// Another contact already uses this name
    #[error("Contact with name '{0}' already exists")]
    DuplicateContact(String),

    /// User input outside the accepted range
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A search was requested with nothing to search for
    #[error("Please enter search query")]
    EmptyQuery,

    /// Persisting the collection failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors that can occur while reading or writing the data file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem access failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode or decode JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AssistantError
pub type AssistantResult<T> = Result<T, AssistantError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
