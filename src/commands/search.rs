//! Global search command.

use super::{truncate, GLOBAL_PREVIEW_CHARS};
use crate::app::AppContext;
use crate::error::{AssistantError, AssistantResult};

/// `search <query>` across contacts and notes.
pub(super) fn global(ctx: &AppContext, query: &str) -> AssistantResult<String> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AssistantError::EmptyQuery);
    }

    let results = ctx.search().search_all(query);
    if results.is_empty() {
        return Ok(format!("Nothing found for query '{}'", query));
    }

    let mut lines = Vec::new();
    if !results.contacts.is_empty() {
        lines.push("=== CONTACTS ===".to_string());
        for contact in &results.contacts {
            lines.push(format!("Name: {}", contact.name()));
            if let Some(phone) = contact.phone() {
                lines.push(format!("  Phone: {}", phone));
            }
            if let Some(email) = contact.email() {
                lines.push(format!("  Email: {}", email));
            }
            if let Some(birthday) = contact.birthday() {
                lines.push(format!("  Birthday: {}", birthday));
            }
            lines.push(String::new());
        }
    }
    if !results.notes.is_empty() {
        lines.push("=== NOTES ===".to_string());
        for note in &results.notes {
            lines.push(format!(
                "Note: {}",
                truncate(note.text().as_str(), GLOBAL_PREVIEW_CHARS)
            ));
            if !note.tags().is_empty() {
                lines.push(format!("  Tags: {}", note.tags().join(", ")));
            }
            lines.push(String::new());
        }
    }
    Ok(lines.join("\n").trim_end().to_string())
}
