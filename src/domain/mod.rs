//! Domain value objects and validators.
//!
//! This module contains type-safe wrappers for contact and note fields.
//! Each value object validates at construction time, so an invalid phone,
//! email, birthday or empty name can never be represented in the system.

pub mod birthday;
pub mod email;
pub mod errors;
pub mod ids;
pub mod phone;
pub mod text;
pub mod validators;

pub use birthday::Birthday;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use ids::{ContactId, NoteId};
pub use phone::PhoneNumber;
pub use text::{ContactName, NoteText};
pub use validators::{
    format_phone, normalize_phone, parse_birthday, parse_birthday_on, validate_email,
    validate_phone, DISPLAY_DATE_FORMAT,
};
