//! Composition root wiring storage, configuration and services together.

use crate::config::Config;
use crate::services::{
    BirthdayService, ContactService, ContactServiceImpl, NoteService, NoteServiceImpl,
    SearchService,
};
use crate::storage::{Storage, StoreSnapshot};
use std::sync::Arc;
use tracing::{info, warn};

/// Everything a command handler needs, owned in one place.
pub struct AppContext {
    config: Config,
    contacts: ContactServiceImpl,
    notes: NoteServiceImpl,
}

impl AppContext {
    /// Load both collections once from `store` and build the services.
    ///
    /// A store that cannot be read starts the session empty.
    pub fn new(config: Config, store: Arc<dyn Storage>) -> Self {
        let StoreSnapshot { contacts, notes } = store.load().unwrap_or_else(|e| {
            warn!("Failed to load stored data, starting empty: {}", e);
            StoreSnapshot::default()
        });
        info!(
            "Loaded {} contacts and {} notes",
            contacts.len(),
            notes.len()
        );

        Self {
            config,
            contacts: ContactServiceImpl::new(store.clone(), contacts),
            notes: NoteServiceImpl::new(store, notes),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn contacts(&self) -> &dyn ContactService {
        &self.contacts
    }

    pub fn contacts_mut(&mut self) -> &mut dyn ContactService {
        &mut self.contacts
    }

    pub fn notes(&self) -> &dyn NoteService {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut dyn NoteService {
        &mut self.notes
    }

    pub fn birthdays(&self) -> BirthdayService<'_> {
        BirthdayService::new(&self.contacts, self.config.birthdays_max_days)
    }

    pub fn search(&self) -> SearchService<'_> {
        SearchService::new(&self.contacts, &self.notes)
    }
}
