//! Data models for the personal assistant.
//!
//! This module contains the contact and note entities together with their
//! flat record shapes used for persistence.

pub mod contact;
pub mod note;

pub use contact::{Contact, ContactDraft, ContactPatch, ContactRecord, FieldUpdate};
pub use note::{Note, NoteRecord};
