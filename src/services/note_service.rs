//! Note service layer.
//!
//! Business logic for note management and retrieval.

use crate::domain::NoteId;
use crate::error::{AssistantError, AssistantResult};
use crate::models::Note;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Note service trait for business operations.
pub trait NoteService: Send + Sync {
    /// Append an already constructed note.
    fn add(&mut self, note: Note) -> AssistantResult<Note>;

    /// Build a note from raw text and tags, then add it.
    fn create(&mut self, text: &str, tags: Vec<String>) -> AssistantResult<Note>;

    /// Replace the text and/or tags of a note. `None` leaves that part as is.
    fn update(
        &mut self,
        id: NoteId,
        text: Option<&str>,
        tags: Option<Vec<String>>,
    ) -> AssistantResult<Note>;

    /// Remove a note, returning it.
    fn delete(&mut self, id: NoteId) -> AssistantResult<Note>;

    fn find(&self, id: NoteId) -> Option<Note>;

    /// Filter notes by tags (any of them, ignoring case) and by a text fragment.
    ///
    /// When both filters are supplied a note must satisfy both. With neither,
    /// every note is returned.
    fn find_by_tags(&self, tags: Option<&[String]>, text: Option<&str>) -> Vec<Note>;

    fn get_all(&self) -> Vec<Note>;
}

/// Default implementation of NoteService.
pub struct NoteServiceImpl {
    store: Arc<dyn Storage>,
    notes: Vec<Note>,
}

impl NoteServiceImpl {
    /// Create a note service over an already loaded collection.
    pub fn new(store: Arc<dyn Storage>, notes: Vec<Note>) -> Self {
        Self { store, notes }
    }

    /// Create a note service, loading its collection from `store`.
    pub fn load(store: Arc<dyn Storage>) -> Self {
        let notes = match store.load() {
            Ok(snapshot) => snapshot.notes,
            Err(e) => {
                warn!("Failed to load notes, starting empty: {}", e);
                Vec::new()
            }
        };
        Self::new(store, notes)
    }

    fn position(&self, id: NoteId) -> AssistantResult<usize> {
        self.notes
            .iter()
            .position(|n| n.id() == id)
            .ok_or_else(|| AssistantError::NoteNotFound(id.to_string()))
    }

    /// Save `next` and make it the current collection. On failure the
    /// current collection is left untouched.
    fn commit(&mut self, next: Vec<Note>) -> AssistantResult<()> {
        self.store.save_notes(&next)?;
        self.notes = next;
        Ok(())
    }
}

impl NoteService for NoteServiceImpl {
    fn add(&mut self, note: Note) -> AssistantResult<Note> {
        let mut next = self.notes.clone();
        next.push(note.clone());
        self.commit(next)?;

        info!("Added note {} with {} tags", note.id(), note.tags().len());
        Ok(note)
    }

    fn create(&mut self, text: &str, tags: Vec<String>) -> AssistantResult<Note> {
        let note = Note::new(text, tags)?;
        self.add(note)
    }

    fn update(
        &mut self,
        id: NoteId,
        text: Option<&str>,
        tags: Option<Vec<String>>,
    ) -> AssistantResult<Note> {
        let index = self.position(id)?;

        let mut note = self.notes[index].clone();
        if let Some(text) = text {
            note.set_text(text)?;
        }
        if let Some(tags) = tags {
            note.set_tags(tags);
        }

        let mut next = self.notes.clone();
        next[index] = note.clone();
        self.commit(next)?;

        info!("Updated note {}", id);
        Ok(note)
    }

    fn delete(&mut self, id: NoteId) -> AssistantResult<Note> {
        let index = self.position(id)?;
        let mut next = self.notes.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        info!("Deleted note {}", id);
        Ok(removed)
    }

    fn find(&self, id: NoteId) -> Option<Note> {
        self.notes.iter().find(|n| n.id() == id).cloned()
    }

    fn find_by_tags(&self, tags: Option<&[String]>, text: Option<&str>) -> Vec<Note> {
        let wanted: Vec<String> = tags
            .unwrap_or_default()
            .iter()
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();
        let needle = text
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty());

        debug!(
            "Filtering notes by {} tags, text {:?}",
            wanted.len(),
            needle
        );

        self.notes
            .iter()
            .filter(|note| wanted.is_empty() || note.has_any_tag(&wanted))
            .filter(|note| needle.as_ref().map_or(true, |n| note.contains_text(n)))
            .cloned()
            .collect()
    }

    fn get_all(&self) -> Vec<Note> {
        self.notes.clone()
    }
}
