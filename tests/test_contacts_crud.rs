//! Integration tests for contact CRUD and search through the contact service.

mod e2e;
mod mocks;

use e2e::fixtures::*;
use mocks::MockStore;
use personal_assistant::domain::{ContactId, ValidationError};
use personal_assistant::models::{ContactDraft, ContactPatch, FieldUpdate};
use personal_assistant::services::{ContactQuery, ContactService, ContactServiceImpl};
use personal_assistant::AssistantError;
use pretty_assertions::assert_eq;

fn service(store: &MockStore) -> ContactServiceImpl {
    ContactServiceImpl::load(store.handle())
}

#[test]
fn test_add_contact_normalizes_fields_and_persists() {
    let store = MockStore::new();
    let mut contacts = service(&store);

    let contact = contacts.add(full_draft("Ann")).unwrap();

    assert_eq!(contact.name().as_str(), "Ann");
    assert_eq!(contact.phone().unwrap().as_str(), "0501234567");
    assert_eq!(contact.email().unwrap().as_str(), "ann@example.com");
    assert_eq!(contact.address(), Some("1 Main St"));
    assert_eq!(contact.birthday().unwrap().to_string(), "15.06.1990");

    assert_eq!(store.get_call_count("save_contacts"), 1);
    assert_eq!(store.saved_contacts(), vec![contact]);
}

#[test]
fn test_add_rejects_duplicate_name_ignoring_case_and_spaces() {
    let store = MockStore::new();
    let mut contacts = service(&store);
    contacts.add(ContactDraft::new("Ann")).unwrap();

    let result = contacts.add(ContactDraft::new("ann "));

    assert!(matches!(result, Err(AssistantError::DuplicateContact(name)) if name == "ann"));
    assert_eq!(contacts.get_all().len(), 1);
    assert_eq!(store.get_call_count("save_contacts"), 1);
}

#[test]
fn test_add_rejects_invalid_fields_without_saving() {
    let store = MockStore::new();
    let mut contacts = service(&store);

    let bad_phone = contacts.add(ContactDraft::new("Ann").phone("12345"));
    let bad_email = contacts.add(ContactDraft::new("Ann").email("not-an-email"));
    let bad_birthday = contacts.add(ContactDraft::new("Ann").birthday("31.02.2000"));
    let no_name = contacts.add(ContactDraft::new("   "));

    assert!(matches!(
        bad_phone,
        Err(AssistantError::Validation(ValidationError::InvalidPhone(_)))
    ));
    assert!(matches!(
        bad_email,
        Err(AssistantError::Validation(ValidationError::InvalidEmail(_)))
    ));
    assert!(matches!(
        bad_birthday,
        Err(AssistantError::Validation(ValidationError::InvalidBirthday { .. }))
    ));
    assert!(matches!(
        no_name,
        Err(AssistantError::Validation(ValidationError::Empty { field: "name" }))
    ));
    assert!(contacts.get_all().is_empty());
    assert_eq!(store.get_call_count("save_contacts"), 0);
}

#[test]
fn test_blank_optional_fields_are_absent() {
    let store = MockStore::new();
    let mut contacts = service(&store);

    let contact = contacts
        .add(ContactDraft::new("Ann").phone("").email("  ").address(" "))
        .unwrap();

    assert!(contact.phone().is_none());
    assert!(contact.email().is_none());
    assert!(contact.address().is_none());
}

#[test]
fn test_update_replaces_all_fields_and_keeps_id() {
    let store = MockStore::new();
    let mut contacts = service(&store);
    let original = contacts.add(full_draft("Ann")).unwrap();

    let replaced = contacts
        .update(original.id(), ContactDraft::new("Anna"))
        .unwrap();

    assert_eq!(replaced.id(), original.id());
    assert_eq!(replaced.name().as_str(), "Anna");
    assert!(replaced.phone().is_none());
    assert!(replaced.birthday().is_none());
    assert_eq!(contacts.get_by_id(original.id()), Some(replaced));
}

#[test]
fn test_update_rejects_name_of_another_contact() {
    let store = MockStore::new();
    let mut contacts = service(&store);
    contacts.add(ContactDraft::new("Ann")).unwrap();
    let bob = contacts.add(ContactDraft::new("Bob")).unwrap();

    let result = contacts.update(bob.id(), ContactDraft::new("ANN"));

    assert!(matches!(result, Err(AssistantError::DuplicateContact(_))));
    assert_eq!(contacts.get_by_id(bob.id()), Some(bob));
}

#[test]
fn test_patch_unknown_id_leaves_collection_unchanged() {
    let store = MockStore::new();
    let mut contacts = service(&store);
    contacts.add(full_draft("Ann")).unwrap();
    let before = contacts.get_all();
    store.reset_call_counts();

    let patch = ContactPatch {
        phone: FieldUpdate::Set("0987654321".to_string()),
        ..Default::default()
    };
    let result = contacts.patch(ContactId::generate(), patch);

    assert!(matches!(result, Err(AssistantError::ContactNotFound(_))));
    assert_eq!(contacts.get_all(), before);
    assert_eq!(store.total_calls(), 0);
}

#[test]
fn test_patch_is_all_or_nothing() {
    let store = MockStore::new();
    let mut contacts = service(&store);
    let ann = contacts.add(full_draft("Ann")).unwrap();

    let patch = ContactPatch {
        phone: FieldUpdate::Set("0987654321".to_string()),
        email: FieldUpdate::Set("broken@".to_string()),
        ..Default::default()
    };
    let result = contacts.patch(ann.id(), patch);

    assert!(matches!(
        result,
        Err(AssistantError::Validation(ValidationError::InvalidEmail(_)))
    ));
    assert_eq!(contacts.get_by_id(ann.id()), Some(ann));
    assert_eq!(store.get_call_count("save_contacts"), 1);
}

#[test]
fn test_patch_sets_and_clears_fields() {
    let store = MockStore::new();
    let mut contacts = service(&store);
    let ann = contacts.add(full_draft("Ann")).unwrap();

    let patch = ContactPatch {
        phone: FieldUpdate::Set("098-765-4321".to_string()),
        email: FieldUpdate::Clear,
        address: FieldUpdate::from_input("  "),
        birthday: FieldUpdate::Set("".to_string()),
        ..Default::default()
    };
    let patched = contacts.patch(ann.id(), patch).unwrap();

    assert_eq!(patched.name(), ann.name());
    assert_eq!(patched.phone().unwrap().as_str(), "0987654321");
    assert!(patched.email().is_none());
    assert!(patched.address().is_none());
    assert!(patched.birthday().is_none());
    assert_eq!(store.saved_contacts(), vec![patched]);
}

#[test]
fn test_patch_may_rename_to_same_name_with_new_case() {
    let store = MockStore::new();
    let mut contacts = service(&store);
    let ann = contacts.add(ContactDraft::new("ann")).unwrap();

    let patch = ContactPatch {
        name: Some("Ann".to_string()),
        ..Default::default()
    };
    let patched = contacts.patch(ann.id(), patch).unwrap();

    assert_eq!(patched.name().as_str(), "Ann");
}

#[test]
fn test_delete_returns_removed_contact() {
    let store = MockStore::new();
    let mut contacts = service(&store);
    let ann = contacts.add(ContactDraft::new("Ann")).unwrap();
    let bob = contacts.add(ContactDraft::new("Bob")).unwrap();

    let removed = contacts.delete(ann.id()).unwrap();

    assert_eq!(removed, ann);
    assert_eq!(contacts.get_all(), vec![bob.clone()]);
    assert_eq!(store.saved_contacts(), vec![bob]);

    let again = contacts.delete(ann.id());
    assert!(matches!(again, Err(AssistantError::ContactNotFound(_))));
}

#[test]
fn test_general_query_matches_any_field() {
    let store = MockStore::new();
    let mut contacts = service(&store);
    let ann = contacts.add(full_draft("Ann")).unwrap();
    let bob = contacts
        .add(ContactDraft::new("Bob").address("Kyiv, Main street"))
        .unwrap();

    assert_eq!(contacts.search(&ContactQuery::text("ANN")), vec![ann.clone()]);
    assert_eq!(contacts.search(&ContactQuery::text("0501")), vec![ann.clone()]);
    assert_eq!(contacts.search(&ContactQuery::text("example.com")), vec![ann.clone()]);
    assert_eq!(contacts.search(&ContactQuery::text("main")), vec![ann, bob]);
}

#[test]
fn test_specific_filters_must_all_match() {
    let store = MockStore::new();
    let mut contacts = service(&store);
    let ann = contacts.add(full_draft("Ann")).unwrap();
    contacts.add(ContactDraft::new("Annabel")).unwrap();

    let by_name_and_phone = ContactQuery {
        name: Some("ann".to_string()),
        phone: Some("123-45".to_string()),
        ..Default::default()
    };
    assert_eq!(contacts.search(&by_name_and_phone), vec![ann.clone()]);

    let by_email = ContactQuery {
        email: Some("ANN@".to_string()),
        ..Default::default()
    };
    assert_eq!(contacts.search(&by_email), vec![ann]);
}

#[test]
fn test_general_query_overrides_specific_filters() {
    let store = MockStore::new();
    let mut contacts = service(&store);
    let bob = contacts.add(ContactDraft::new("Bob")).unwrap();
    contacts.add(ContactDraft::new("Ann")).unwrap();

    let query = ContactQuery {
        query: Some("bob".to_string()),
        name: Some("ann".to_string()),
        ..Default::default()
    };
    assert_eq!(contacts.search(&query), vec![bob]);
}

#[test]
fn test_save_failure_is_reported() {
    let store = MockStore::new();
    let mut contacts = service(&store);
    store.fail_saves(true);

    let result = contacts.add(ContactDraft::new("Ann"));

    assert!(matches!(result, Err(AssistantError::Storage(_))));
    assert!(contacts.get_all().is_empty());

    store.fail_saves(false);
    let added = contacts.add(ContactDraft::new("Ann")).unwrap();
    assert_eq!(store.saved_contacts(), vec![added]);
}

#[test]
fn test_failed_save_keeps_collection_unchanged() {
    let store = MockStore::new();
    let mut contacts = service(&store);
    let ann = contacts.add(full_draft("Ann")).unwrap();
    store.fail_saves(true);

    let patch = ContactPatch {
        phone: FieldUpdate::Clear,
        ..Default::default()
    };
    assert!(matches!(
        contacts.patch(ann.id(), patch),
        Err(AssistantError::Storage(_))
    ));
    assert!(matches!(
        contacts.update(ann.id(), ContactDraft::new("Bob")),
        Err(AssistantError::Storage(_))
    ));
    assert!(matches!(
        contacts.delete(ann.id()),
        Err(AssistantError::Storage(_))
    ));

    assert_eq!(contacts.get_all(), vec![ann.clone()]);
    assert_eq!(store.saved_contacts(), vec![ann]);
}

#[test]
fn test_failed_load_starts_empty() {
    let store = MockStore::with_data(vec![contact_born("Ann", "01.01.1990")], Vec::new());
    store.fail_loads(true);

    let contacts = service(&store);

    assert!(contacts.get_all().is_empty());
    assert_eq!(store.get_call_count("load"), 1);
}
