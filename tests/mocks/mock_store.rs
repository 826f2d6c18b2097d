use personal_assistant::error::{StorageError, StorageResult};
use personal_assistant::models::{Contact, Note};
use personal_assistant::storage::{Storage, StoreSnapshot};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock store for testing.
///
/// Keeps the last saved collections in memory, counts every call and can be
/// told to fail saves or loads. Clones share state, so a test can keep one
/// handle while the services own another.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockStore {
    snapshot: Arc<Mutex<StoreSnapshot>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
    fail_loads: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockStore {
    /// Create a new empty MockStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose next load returns the given data.
    pub fn with_data(contacts: Vec<Contact>, notes: Vec<Note>) -> Self {
        let store = Self::new();
        *store.snapshot.lock().unwrap() = StoreSnapshot { contacts, notes };
        store
    }

    /// Make every following save return an I/O error.
    pub fn fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// Make every following load return an I/O error.
    pub fn fail_loads(&self, fail: bool) {
        *self.fail_loads.lock().unwrap() = fail;
    }

    /// Contacts as last saved.
    pub fn saved_contacts(&self) -> Vec<Contact> {
        self.snapshot.lock().unwrap().contacts.clone()
    }

    /// Notes as last saved.
    pub fn saved_notes(&self) -> Vec<Note> {
        self.snapshot.lock().unwrap().notes.clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Total number of calls of any kind.
    pub fn total_calls(&self) -> usize {
        self.call_counts.lock().unwrap().values().sum()
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    /// Share this mock as a storage handle for the services.
    pub fn handle(&self) -> Arc<dyn Storage> {
        Arc::new(self.clone())
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check(&self, flag: &Mutex<bool>) -> StorageResult<()> {
        if *flag.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock failure",
            )));
        }
        Ok(())
    }
}

impl Storage for MockStore {
    fn load(&self) -> StorageResult<StoreSnapshot> {
        self.track_call("load");
        self.check(&self.fail_loads)?;
        Ok(self.snapshot.lock().unwrap().clone())
    }

    fn save_contacts(&self, contacts: &[Contact]) -> StorageResult<()> {
        self.track_call("save_contacts");
        self.check(&self.fail_saves)?;
        self.snapshot.lock().unwrap().contacts = contacts.to_vec();
        Ok(())
    }

    fn save_notes(&self, notes: &[Note]) -> StorageResult<()> {
        self.track_call("save_notes");
        self.check(&self.fail_saves)?;
        self.snapshot.lock().unwrap().notes = notes.to_vec();
        Ok(())
    }
}
