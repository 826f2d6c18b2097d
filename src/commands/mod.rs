//! Command handlers for the interactive prompt.
//!
//! Each handler calls one service operation and renders the result as text.
//! Failures never escape: [`execute`] turns every error into an `Error: ...`
//! reply so the session keeps running.

mod birthdays;
mod contacts;
mod notes;
mod search;

use crate::app::AppContext;
use crate::cli::{parse_command, Command, HELP};
use crate::error::AssistantResult;
use tracing::debug;

/// Note preview length in `list-notes`.
pub const LIST_PREVIEW_CHARS: usize = 60;
/// Note preview length in `search-notes` and `search-notes-tag`.
pub const SEARCH_PREVIEW_CHARS: usize = 80;
/// Note preview length in global search.
pub const GLOBAL_PREVIEW_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

/// What the prompt loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Exit,
}

/// Parse and run one prompt line. Blank lines produce no outcome.
pub fn handle_line(ctx: &mut AppContext, line: &str) -> Option<Outcome> {
    match parse_command(line) {
        Ok(Some(command)) => Some(execute(ctx, command)),
        Ok(None) => None,
        Err(e) => Some(Outcome::Reply(error_reply(&e))),
    }
}

/// Run a parsed command against the application context.
pub fn execute(ctx: &mut AppContext, command: Command) -> Outcome {
    debug!("Executing {:?}", command);

    let result = match command {
        Command::Exit => return Outcome::Exit,
        Command::Help => Ok(HELP.to_string()),
        Command::AddContact(draft) => contacts::add(ctx, draft),
        Command::ReplaceContact { id, draft } => contacts::replace(ctx, &id, draft),
        Command::EditContact { id, patch } => contacts::edit(ctx, &id, patch),
        Command::DeleteContact(id) => contacts::delete(ctx, &id),
        Command::ShowContact(id) => contacts::show(ctx, &id),
        Command::ListContacts => Ok(contacts::list(ctx)),
        Command::SearchContacts(query) => Ok(contacts::search(ctx, &query)),
        Command::AddNote { text, tags } => notes::add(ctx, &text, tags),
        Command::EditNote { id, text, tags } => notes::edit(ctx, &id, text.as_deref(), tags),
        Command::DeleteNote(id) => notes::delete(ctx, &id),
        Command::ListNotes => Ok(notes::list(ctx)),
        Command::SearchNotes(query) => Ok(notes::search(ctx, &query)),
        Command::SearchNotesByTag(tags) => Ok(notes::search_by_tags(ctx, &tags)),
        Command::Birthdays(days) => birthdays::upcoming(ctx, days),
        Command::Search(query) => search::global(ctx, &query),
    };

    Outcome::Reply(render(result))
}

fn render(result: AssistantResult<String>) -> String {
    match result {
        Ok(text) => text,
        Err(e) => error_reply(&e),
    }
}

fn error_reply(error: &dyn std::error::Error) -> String {
    format!("Error: {}", error)
}

/// Cut `text` to at most `max_chars` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}
