//! Global search service.
//!
//! Runs one query over contacts and notes at once.

use crate::models::{Contact, Note};
use crate::services::{ContactQuery, ContactService, NoteService};
use tracing::debug;

/// Matches from every collection for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalSearchResults {
    pub contacts: Vec<Contact>,
    pub notes: Vec<Note>,
}

impl GlobalSearchResults {
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty() && self.notes.is_empty()
    }

    pub fn total(&self) -> usize {
        self.contacts.len() + self.notes.len()
    }
}

/// Searches contacts and notes together.
pub struct SearchService<'a> {
    contacts: &'a dyn ContactService,
    notes: &'a dyn NoteService,
}

impl<'a> SearchService<'a> {
    pub fn new(contacts: &'a dyn ContactService, notes: &'a dyn NoteService) -> Self {
        Self { contacts, notes }
    }

    /// Run `query` as a general contact search and a note text search.
    ///
    /// A blank query matches nothing.
    pub fn search_all(&self, query: &str) -> GlobalSearchResults {
        let query = query.trim();
        if query.is_empty() {
            return GlobalSearchResults::default();
        }

        let results = GlobalSearchResults {
            contacts: self.contacts.search(&ContactQuery::text(query)),
            notes: self.notes.find_by_tags(None, Some(query)),
        };
        debug!("Global search '{}' found {} items", query, results.total());
        results
    }
}
