//! In-memory storage backend.

use crate::error::StorageResult;
use crate::models::{Contact, Note};
use crate::storage::traits::{Storage, StoreSnapshot};
use std::sync::Mutex;

/// In-process store holding the last saved snapshot.
///
/// Useful for embedding the services without touching disk, and for
/// benchmarks.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Mutex<StoreSnapshot>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with data.
    pub fn with_data(contacts: Vec<Contact>, notes: Vec<Note>) -> Self {
        Self {
            snapshot: Mutex::new(StoreSnapshot { contacts, notes }),
        }
    }

    /// Copy of what is currently persisted.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreSnapshot> {
        // A poisoned lock still holds a complete snapshot
        self.snapshot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Storage for MemoryStore {
    fn load(&self) -> StorageResult<StoreSnapshot> {
        Ok(self.snapshot())
    }

    fn save_contacts(&self, contacts: &[Contact]) -> StorageResult<()> {
        self.lock().contacts = contacts.to_vec();
        Ok(())
    }

    fn save_notes(&self, notes: &[Note]) -> StorageResult<()> {
        self.lock().notes = notes.to_vec();
        Ok(())
    }
}
