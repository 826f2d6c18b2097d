//! Test fixtures and sample data.
//!
//! Reusable drafts and entities for contacts and notes.

use chrono::NaiveDate;
use personal_assistant::models::{Contact, ContactDraft, Note};

/// A draft with every field filled in.
#[allow(dead_code)]
pub fn full_draft(name: &str) -> ContactDraft {
    ContactDraft::new(name)
        .phone("(050) 123-4567")
        .email(format!("{}@example.com", name.to_lowercase()))
        .address("1 Main St")
        .birthday("15.06.1990")
}

/// A stored contact with only a name and a birthday.
#[allow(dead_code)]
pub fn contact_born(name: &str, birthday: &str) -> Contact {
    Contact::new(ContactDraft::new(name).birthday(birthday)).expect("fixture contact is valid")
}

/// A stored note with the given tags.
#[allow(dead_code)]
pub fn sample_note(text: &str, tags: &[&str]) -> Note {
    Note::new(text, tags.iter().copied()).expect("fixture note is valid")
}

/// Calendar date shorthand.
#[allow(dead_code)]
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date is valid")
}

#[allow(dead_code)]
pub fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
