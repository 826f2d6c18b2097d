//! Line parser for the interactive prompt.
//!
//! Input is split on whitespace; the first token selects the command
//! (case-insensitive) and the rest are its arguments.

use crate::models::{ContactDraft, ContactPatch, FieldUpdate};
use thiserror::Error;

/// Placeholder that skips an optional positional slot in `add-contact`.
pub const SKIP: &str = "-";

/// Tag marker in note commands.
pub const TAG_PREFIX: char = '#';

pub const HELP: &str = "\
Available commands:
  add-contact <name> [phone] [email] [address] [birthday]   ('-' skips a field)
  replace-contact <id> <name> [phone] [email] [address] [birthday]
  edit-contact <id> field=value ...   (fields: name, phone, email, address, birthday; empty value clears)
  delete-contact <id>
  show-contact <id>
  list-contacts
  search-contacts <query>
  add-note <text> [#tag ...]
  edit-note <id> [text] [#tag ...]
  delete-note <id>
  list-notes
  search-notes <query>
  search-notes-tag <tag> [tag ...]
  birthdays [days]
  search <query>   (global search)
  help
  exit | quit";

/// A parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddContact(ContactDraft),
    ReplaceContact { id: String, draft: ContactDraft },
    EditContact { id: String, patch: ContactPatch },
    DeleteContact(String),
    ShowContact(String),
    ListContacts,
    SearchContacts(String),
    AddNote { text: String, tags: Vec<String> },
    EditNote {
        id: String,
        text: Option<String>,
        tags: Option<Vec<String>>,
    },
    DeleteNote(String),
    ListNotes,
    SearchNotes(String),
    SearchNotesByTag(Vec<String>),
    /// `None` uses the configured default window
    Birthdays(Option<i64>),
    /// May be blank; the handler reports that to the user
    Search(String),
    Help,
    Exit,
}

/// Why a line could not be turned into a [`Command`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command '{0}'. Type 'help' to see available commands.")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown field '{0}'. Expected one of: name, phone, email, address, birthday")]
    UnknownField(String),

    #[error("Days must be a whole number, got '{0}'")]
    InvalidDays(String),
}

/// Parse one prompt line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    let mut tokens = line.split_whitespace();
    let Some(word) = tokens.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = tokens.collect();

    let command = match word.to_lowercase().as_str() {
        "add-contact" => {
            const USAGE: &str = "add-contact <name> [phone] [email] [address] [birthday]";
            Command::AddContact(parse_draft(&args).ok_or(ParseError::Usage(USAGE))?)
        }
        "replace-contact" => {
            const USAGE: &str = "replace-contact <id> <name> [phone] [email] [address] [birthday]";
            let (id, rest) = args.split_first().ok_or(ParseError::Usage(USAGE))?;
            let draft = parse_draft(rest).ok_or(ParseError::Usage(USAGE))?;
            Command::ReplaceContact {
                id: id.to_string(),
                draft,
            }
        }
        "edit-contact" => {
            const USAGE: &str = "edit-contact <id> field=value ...";
            let (id, rest) = args.split_first().ok_or(ParseError::Usage(USAGE))?;
            let patch = parse_patch(rest)?;
            if patch.is_empty() {
                return Err(ParseError::Usage(USAGE));
            }
            Command::EditContact {
                id: id.to_string(),
                patch,
            }
        }
        "delete-contact" => Command::DeleteContact(single(&args, "delete-contact <id>")?),
        "show-contact" => Command::ShowContact(single(&args, "show-contact <id>")?),
        "list-contacts" => Command::ListContacts,
        "search-contacts" => {
            Command::SearchContacts(rest_text(&args, "search-contacts <query>")?)
        }
        "add-note" => {
            let (text, tags) = split_tags(&args);
            if text.is_empty() {
                return Err(ParseError::Usage("add-note <text> [#tag ...]"));
            }
            Command::AddNote { text, tags }
        }
        "edit-note" => {
            const USAGE: &str = "edit-note <id> [text] [#tag ...]";
            let (id, rest) = args.split_first().ok_or(ParseError::Usage(USAGE))?;
            let (text, tags) = split_tags(rest);
            if text.is_empty() && tags.is_empty() {
                return Err(ParseError::Usage(USAGE));
            }
            Command::EditNote {
                id: id.to_string(),
                text: (!text.is_empty()).then_some(text),
                tags: (!tags.is_empty()).then_some(tags),
            }
        }
        "delete-note" => Command::DeleteNote(single(&args, "delete-note <id>")?),
        "list-notes" => Command::ListNotes,
        "search-notes" => Command::SearchNotes(rest_text(&args, "search-notes <query>")?),
        "search-notes-tag" => {
            if args.is_empty() {
                return Err(ParseError::Usage("search-notes-tag <tag> [tag ...]"));
            }
            Command::SearchNotesByTag(
                args.iter()
                    .map(|tag| tag.trim_start_matches(TAG_PREFIX).to_string())
                    .collect(),
            )
        }
        "birthdays" => match args.as_slice() {
            [] => Command::Birthdays(None),
            [days] => Command::Birthdays(Some(
                days.parse()
                    .map_err(|_| ParseError::InvalidDays(days.to_string()))?,
            )),
            _ => return Err(ParseError::Usage("birthdays [days]")),
        },
        "search" => Command::Search(args.join(" ")),
        "help" => Command::Help,
        "exit" | "quit" => Command::Exit,
        _ => return Err(ParseError::UnknownCommand(word.to_string())),
    };

    Ok(Some(command))
}

/// `<name> [phone] [email] [address] [birthday]`, with `-` skipping a slot.
fn parse_draft(args: &[&str]) -> Option<ContactDraft> {
    if args.is_empty() || args.len() > 5 {
        return None;
    }
    let slot = |i: usize| args.get(i).copied().filter(|v| *v != SKIP);

    let mut draft = ContactDraft::new(slot(0)?);
    draft.phone = slot(1).map(str::to_string);
    draft.email = slot(2).map(str::to_string);
    draft.address = slot(3).map(str::to_string);
    draft.birthday = slot(4).map(str::to_string);
    Some(draft)
}

/// `field=value ...`; tokens without a known `field=` prefix continue the previous value.
fn parse_patch(args: &[&str]) -> Result<ContactPatch, ParseError> {
    let mut fields: Vec<(String, String)> = Vec::new();

    for token in args {
        let assignment = token
            .split_once('=')
            .map(|(field, value)| (field.to_lowercase(), value))
            .filter(|(field, _)| is_contact_field(field));

        if let Some((field, value)) = assignment {
            fields.push((field, value.to_string()));
            continue;
        }
        match fields.last_mut() {
            Some((_, value)) => {
                if !value.is_empty() {
                    value.push(' ');
                }
                value.push_str(token);
            }
            None => {
                let field = token.split_once('=').map_or(*token, |(field, _)| field);
                return Err(ParseError::UnknownField(field.to_string()));
            }
        }
    }

    let mut patch = ContactPatch::default();
    for (field, value) in fields {
        match field.as_str() {
            "name" => patch.name = Some(value),
            "phone" => patch.phone = FieldUpdate::from_input(&value),
            "email" => patch.email = FieldUpdate::from_input(&value),
            "address" => patch.address = FieldUpdate::from_input(&value),
            "birthday" => patch.birthday = FieldUpdate::from_input(&value),
            other => return Err(ParseError::UnknownField(other.to_string())),
        }
    }
    Ok(patch)
}

fn is_contact_field(field: &str) -> bool {
    matches!(field, "name" | "phone" | "email" | "address" | "birthday")
}

/// Separate `#tag` tokens from the free text around them.
fn split_tags(args: &[&str]) -> (String, Vec<String>) {
    let (tags, words): (Vec<&str>, Vec<&str>) =
        args.iter().copied().partition(|token| token.starts_with(TAG_PREFIX));

    let tags = tags
        .into_iter()
        .map(|tag| tag.trim_start_matches(TAG_PREFIX).to_string())
        .filter(|tag| !tag.is_empty())
        .collect();
    (words.join(" "), tags)
}

fn single(args: &[&str], usage: &'static str) -> Result<String, ParseError> {
    match args {
        [value] => Ok(value.to_string()),
        _ => Err(ParseError::Usage(usage)),
    }
}

fn rest_text(args: &[&str], usage: &'static str) -> Result<String, ParseError> {
    if args.is_empty() {
        return Err(ParseError::Usage(usage));
    }
    Ok(args.join(" "))
}
