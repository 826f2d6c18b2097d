//! Note command handlers.

use super::{truncate, LIST_PREVIEW_CHARS, SEARCH_PREVIEW_CHARS};
use crate::app::AppContext;
use crate::domain::NoteId;
use crate::error::AssistantResult;
use crate::models::Note;

pub(super) fn add(ctx: &mut AppContext, text: &str, tags: Vec<String>) -> AssistantResult<String> {
    let note = ctx.notes_mut().create(text, tags)?;
    let mut reply = format!("Note added (ID: {})", note.id());
    if !note.tags().is_empty() {
        reply.push_str(&format!(" with tags: {}", note.tags().join(", ")));
    }
    Ok(reply)
}

pub(super) fn edit(
    ctx: &mut AppContext,
    id: &str,
    text: Option<&str>,
    tags: Option<Vec<String>>,
) -> AssistantResult<String> {
    let id = NoteId::parse(id)?;
    let note = ctx.notes_mut().update(id, text, tags)?;
    Ok(format!("Note (ID: {}) updated", note.id()))
}

pub(super) fn delete(ctx: &mut AppContext, id: &str) -> AssistantResult<String> {
    let id = NoteId::parse(id)?;
    let removed = ctx.notes_mut().delete(id)?;
    Ok(format!("Note (ID: {}) deleted", removed.id()))
}

pub(super) fn list(ctx: &AppContext) -> String {
    let notes = ctx.notes().get_all();
    if notes.is_empty() {
        return "Note list is empty".to_string();
    }
    render("All notes:", &notes, LIST_PREVIEW_CHARS)
}

pub(super) fn search(ctx: &AppContext, query: &str) -> String {
    let found = ctx.notes().find_by_tags(None, Some(query));
    if found.is_empty() {
        return format!("No notes found for query '{}'", query);
    }
    render("Note search results:", &found, SEARCH_PREVIEW_CHARS)
}

pub(super) fn search_by_tags(ctx: &AppContext, tags: &[String]) -> String {
    let label = tags.join(", ");
    let found = ctx.notes().find_by_tags(Some(tags), None);
    if found.is_empty() {
        return format!("No notes found with tags '{}'", label);
    }
    render(&format!("Notes with tags '{}':", label), &found, SEARCH_PREVIEW_CHARS)
}

fn render(heading: &str, notes: &[Note], preview: usize) -> String {
    let mut lines = vec![heading.to_string()];
    for note in notes {
        let mut line = truncate(note.text().as_str(), preview);
        if !note.tags().is_empty() {
            line.push_str(&format!(" | Tags: {}", note.tags().join(", ")));
        }
        line.push_str(&format!(" | ID: {}", note.id()));
        lines.push(line);
    }
    lines.join("\n")
}
