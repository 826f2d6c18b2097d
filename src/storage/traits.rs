//! Storage trait definitions.

use crate::error::StorageResult;
use crate::models::{Contact, Note};

/// Everything persisted in one load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub contacts: Vec<Contact>,
    pub notes: Vec<Note>,
}

/// Persistence sink for the contact and note collections.
///
/// Services own the in-memory collections; a store only loads them once at
/// startup and receives a full rewrite of one collection after every mutation.
pub trait Storage: Send + Sync {
    /// Load both collections.
    ///
    /// A store that does not exist yet yields empty collections. Individual
    /// records that cannot be read are skipped rather than failing the load.
    fn load(&self) -> StorageResult<StoreSnapshot>;

    /// Replace the persisted contacts, leaving the notes as last saved.
    fn save_contacts(&self, contacts: &[Contact]) -> StorageResult<()>;

    /// Replace the persisted notes, leaving the contacts as last saved.
    fn save_notes(&self, notes: &[Note]) -> StorageResult<()>;
}
