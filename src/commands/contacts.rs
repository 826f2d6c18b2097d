//! Contact command handlers.

use crate::app::AppContext;
use crate::domain::ContactId;
use crate::error::{AssistantError, AssistantResult};
use crate::models::{Contact, ContactDraft, ContactPatch};
use crate::services::ContactQuery;

pub(super) fn add(ctx: &mut AppContext, draft: ContactDraft) -> AssistantResult<String> {
    let contact = ctx.contacts_mut().add(draft)?;
    Ok(format!(
        "Contact '{}' added (ID: {})",
        contact.name(),
        contact.id()
    ))
}

pub(super) fn replace(ctx: &mut AppContext, id: &str, draft: ContactDraft) -> AssistantResult<String> {
    let id = ContactId::parse(id)?;
    let contact = ctx.contacts_mut().update(id, draft)?;
    Ok(format!("Contact '{}' replaced", contact.name()))
}

pub(super) fn edit(ctx: &mut AppContext, id: &str, patch: ContactPatch) -> AssistantResult<String> {
    let id = ContactId::parse(id)?;
    let contact = ctx.contacts_mut().patch(id, patch)?;
    Ok(format!("Contact '{}' updated", contact.name()))
}

pub(super) fn delete(ctx: &mut AppContext, id: &str) -> AssistantResult<String> {
    let id = ContactId::parse(id)?;
    let removed = ctx.contacts_mut().delete(id)?;
    Ok(format!("Contact '{}' deleted", removed.name()))
}

pub(super) fn show(ctx: &AppContext, id: &str) -> AssistantResult<String> {
    let contact_id = ContactId::parse(id)?;
    ctx.contacts()
        .get_by_id(contact_id)
        .map(|contact| contact.to_string())
        .ok_or_else(|| AssistantError::ContactNotFound(id.trim().to_string()))
}

pub(super) fn list(ctx: &AppContext) -> String {
    let contacts = ctx.contacts().get_all();
    if contacts.is_empty() {
        return "Contact list is empty".to_string();
    }

    let mut lines = vec!["All contacts:".to_string()];
    lines.extend(
        contacts
            .iter()
            .enumerate()
            .map(|(i, contact)| format!("{}. {}", i + 1, summary(contact))),
    );
    lines.join("\n")
}

pub(super) fn search(ctx: &AppContext, query: &str) -> String {
    let found = ctx.contacts().search(&ContactQuery::text(query));
    if found.is_empty() {
        return format!("No contacts found for query '{}'", query);
    }

    let mut lines = vec!["Contact search results:".to_string()];
    lines.extend(found.iter().map(summary));
    lines.join("\n")
}

/// One-line rendering used by list and search output.
fn summary(contact: &Contact) -> String {
    let mut line = contact.name().to_string();
    if let Some(phone) = contact.phone() {
        line.push_str(&format!(" | Phone: {}", phone));
    }
    if let Some(email) = contact.email() {
        line.push_str(&format!(" | Email: {}", email));
    }
    if let Some(birthday) = contact.birthday() {
        line.push_str(&format!(" | Birthday: {}", birthday));
    }
    line.push_str(&format!(" | ID: {}", contact.id()));
    line
}
