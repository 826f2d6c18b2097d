//! Contact service layer.
//!
//! CRUD and search over the in-memory contact collection. The collection is
//! loaded once and written back to storage after every mutation.

use crate::domain::{normalize_phone, ContactId};
use crate::error::{AssistantError, AssistantResult};
use crate::models::{Contact, ContactDraft, ContactPatch};
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Criteria for [`ContactService::search`].
///
/// Blank strings count as "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactQuery {
    /// Matched against name, phone, email and address; overrides the specific filters
    pub query: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ContactQuery {
    /// A general free-text query.
    pub fn text(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }
}

/// Contact service trait for business operations.
pub trait ContactService: Send + Sync {
    /// Create a contact. Names must be unique ignoring case and surrounding whitespace.
    fn add(&mut self, draft: ContactDraft) -> AssistantResult<Contact>;

    /// Replace every field of a contact, keeping its id.
    fn update(&mut self, id: ContactId, draft: ContactDraft) -> AssistantResult<Contact>;

    /// Change only the fields named in `patch`.
    fn patch(&mut self, id: ContactId, patch: ContactPatch) -> AssistantResult<Contact>;

    /// Remove a contact, returning it.
    fn delete(&mut self, id: ContactId) -> AssistantResult<Contact>;

    /// Case-insensitive partial matching, in insertion order.
    fn search(&self, query: &ContactQuery) -> Vec<Contact>;

    fn get_by_id(&self, id: ContactId) -> Option<Contact>;

    /// Snapshot of every contact in insertion order.
    fn get_all(&self) -> Vec<Contact>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    store: Arc<dyn Storage>,
    contacts: Vec<Contact>,
}

impl ContactServiceImpl {
    /// Create a contact service over an already loaded collection.
    pub fn new(store: Arc<dyn Storage>, contacts: Vec<Contact>) -> Self {
        Self { store, contacts }
    }

    /// Create a contact service, loading its collection from `store`.
    ///
    /// A store that cannot be read yields an empty collection.
    pub fn load(store: Arc<dyn Storage>) -> Self {
        let contacts = match store.load() {
            Ok(snapshot) => snapshot.contacts,
            Err(e) => {
                warn!("Failed to load contacts, starting empty: {}", e);
                Vec::new()
            }
        };
        Self::new(store, contacts)
    }

    fn position(&self, id: ContactId) -> AssistantResult<usize> {
        self.contacts
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| AssistantError::ContactNotFound(id.to_string()))
    }

    /// Fail if a contact other than `except` already uses `name`.
    fn ensure_unique_name(&self, name: &str, except: Option<ContactId>) -> AssistantResult<()> {
        let clash = self
            .contacts
            .iter()
            .find(|c| c.name().matches_ignore_case(name));

        match clash {
            Some(existing) if Some(existing.id()) != except => {
                Err(AssistantError::DuplicateContact(name.trim().to_string()))
            }
            _ => Ok(()),
        }
    }

    /// Save `next` and make it the current collection. On failure the
    /// current collection is left untouched.
    fn commit(&mut self, next: Vec<Contact>) -> AssistantResult<()> {
        self.store.save_contacts(&next)?;
        self.contacts = next;
        Ok(())
    }
}

impl ContactService for ContactServiceImpl {
    fn add(&mut self, draft: ContactDraft) -> AssistantResult<Contact> {
        self.ensure_unique_name(&draft.name, None)?;

        let contact = Contact::new(draft)?;
        let mut next = self.contacts.clone();
        next.push(contact.clone());
        self.commit(next)?;

        info!("Added contact {} ({})", contact.name(), contact.id());
        Ok(contact)
    }

    fn update(&mut self, id: ContactId, draft: ContactDraft) -> AssistantResult<Contact> {
        let index = self.position(id)?;
        self.ensure_unique_name(&draft.name, Some(id))?;

        let contact = Contact::with_id(id, draft)?;
        let mut next = self.contacts.clone();
        next[index] = contact.clone();
        self.commit(next)?;

        info!("Replaced contact {}", id);
        Ok(contact)
    }

    fn patch(&mut self, id: ContactId, patch: ContactPatch) -> AssistantResult<Contact> {
        let index = self.position(id)?;
        if let Some(name) = &patch.name {
            self.ensure_unique_name(name, Some(id))?;
        }

        let contact = self.contacts[index].apply_patch(&patch)?;
        let mut next = self.contacts.clone();
        next[index] = contact.clone();
        self.commit(next)?;

        info!("Patched contact {}", id);
        Ok(contact)
    }

    fn delete(&mut self, id: ContactId) -> AssistantResult<Contact> {
        let index = self.position(id)?;
        let mut next = self.contacts.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        info!("Deleted contact {} ({})", removed.name(), id);
        Ok(removed)
    }

    fn search(&self, query: &ContactQuery) -> Vec<Contact> {
        if let Some(needle) = non_blank(&query.query) {
            let needle = needle.to_lowercase();
            debug!("Searching contacts for '{}'", needle);
            return self
                .contacts
                .iter()
                .filter(|c| c.contains_text(&needle))
                .cloned()
                .collect();
        }

        let name = non_blank(&query.name).map(str::to_lowercase);
        let email = non_blank(&query.email).map(str::to_lowercase);
        let phone = non_blank(&query.phone).map(|raw| {
            let digits = normalize_phone(raw);
            if digits.is_empty() {
                raw.to_lowercase()
            } else {
                digits.to_lowercase()
            }
        });

        if name.is_none() && phone.is_none() && email.is_none() {
            return Vec::new();
        }

        self.contacts
            .iter()
            .filter(|c| {
                name.as_ref()
                    .map_or(true, |n| c.name().as_str().to_lowercase().contains(n))
                    && phone.as_ref().map_or(true, |p| {
                        c.phone().is_some_and(|phone| phone.as_str().contains(p.as_str()))
                    })
                    && email.as_ref().map_or(true, |e| {
                        c.email().is_some_and(|email| email.as_str().contains(e.as_str()))
                    })
            })
            .cloned()
            .collect()
    }

    fn get_by_id(&self, id: ContactId) -> Option<Contact> {
        self.contacts.iter().find(|c| c.id() == id).cloned()
    }

    fn get_all(&self) -> Vec<Contact> {
        self.contacts.clone()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
