//! Note model: a free-text entry with optional tags.

use crate::domain::{NoteId, NoteText, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A free-text note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    id: NoteId,
    text: NoteText,
    tags: Vec<String>,
}

/// Flat, persisted shape of a note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteRecord {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Note {
    /// Create a new note with a freshly generated id.
    ///
    /// Tags are trimmed and blank tags are dropped; order and duplicates are kept.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Empty` if the text is blank.
    pub fn new<I, S>(text: &str, tags: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            id: NoteId::generate(),
            text: NoteText::new(text)?,
            tags: clean_tags(tags),
        })
    }

    /// Rebuild a note from its persisted record.
    pub fn from_record(record: NoteRecord) -> Result<Self, ValidationError> {
        Ok(Self {
            id: NoteId::parse(&record.id)?,
            text: NoteText::new(&record.text)?,
            tags: clean_tags(record.tags),
        })
    }

    /// Flatten into the persisted record shape.
    pub fn to_record(&self) -> NoteRecord {
        NoteRecord {
            id: self.id.to_string(),
            text: self.text.to_string(),
            tags: self.tags.clone(),
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn text(&self) -> &NoteText {
        &self.text
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Replace the text, validating it first.
    pub fn set_text(&mut self, text: &str) -> Result<(), ValidationError> {
        self.text = NoteText::new(text)?;
        Ok(())
    }

    /// Replace the tag list.
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = clean_tags(tags);
    }

    /// Whether any of the lower-cased `wanted` tags is present, ignoring case.
    pub fn has_any_tag(&self, wanted_lower: &[String]) -> bool {
        self.tags
            .iter()
            .any(|tag| wanted_lower.contains(&tag.to_lowercase()))
    }

    /// Whether the text contains a lower-cased needle, ignoring case.
    pub fn contains_text(&self, needle_lower: &str) -> bool {
        self.text.as_str().to_lowercase().contains(needle_lower)
    }
}

impl TryFrom<NoteRecord> for Note {
    type Error = ValidationError;

    fn try_from(record: NoteRecord) -> Result<Self, Self::Error> {
        Note::from_record(record)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags = if self.tags.is_empty() {
            "No tags".to_string()
        } else {
            self.tags.join(", ")
        };
        write!(f, "Note[{}]: {} | Tags: {}", self.id, self.text, tags)
    }
}

fn clean_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| tag.as_ref().trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_new_trims_text_and_tags() {
        let note = Note::new("  Buy milk ", [" shopping", "home ", "  "]).unwrap();
        assert_eq!(note.text().as_str(), "Buy milk");
        assert_eq!(note.tags(), ["shopping", "home"]);
    }

    #[test]
    fn test_note_keeps_duplicate_tags_in_order() {
        let note = Note::new("x", ["b", "a", "b"]).unwrap();
        assert_eq!(note.tags(), ["b", "a", "b"]);
    }

    #[test]
    fn test_note_rejects_blank_text() {
        let err = Note::new("   ", Vec::<String>::new()).unwrap_err();
        assert_eq!(err.field(), "text");
    }

    #[test]
    fn test_record_round_trip() {
        let note = Note::new("Call Ann", ["Work", "calls"]).unwrap();
        let json = serde_json::to_string(&note.to_record()).unwrap();
        let record: NoteRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(Note::try_from(record).unwrap(), note);
    }

    #[test]
    fn test_record_without_tags() {
        let json = r#"{"id":"67e55044-10b1-426f-9247-bb680e5fe0c8","text":"hello"}"#;
        let record: NoteRecord = serde_json::from_str(json).unwrap();
        assert!(Note::from_record(record).unwrap().tags().is_empty());
    }

    #[test]
    fn test_set_text_keeps_old_text_on_error() {
        let mut note = Note::new("original", ["a"]).unwrap();
        assert!(note.set_text("  ").is_err());
        assert_eq!(note.text().as_str(), "original");
    }

    #[test]
    fn test_tag_matching_ignores_case() {
        let note = Note::new("x", ["Work"]).unwrap();
        assert!(note.has_any_tag(&["work".to_string()]));
        assert!(!note.has_any_tag(&["home".to_string()]));
    }

    #[test]
    fn test_display() {
        let note = Note::new("hello", Vec::<String>::new()).unwrap();
        assert!(note.to_string().ends_with("hello | Tags: No tags"));
    }
}
