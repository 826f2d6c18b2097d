//! Personal Assistant - a command-line address book and notebook.
//!
//! Contacts and free-text notes are kept in memory and persisted to a single
//! JSON file after every change.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phones, emails, birthdays, ids)
//! - **models**: Contact and note entities with their persisted record shapes
//! - **storage**: The `Storage` trait with file and in-memory implementations
//! - **services**: Contact and note CRUD, birthday lookahead and global search
//! - **app**: Composition root owning the services
//! - **cli** / **commands**: Prompt line parsing and text rendering
//! - **config** / **error**: Environment configuration and error types

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use app::AppContext;
pub use config::Config;
pub use error::{AssistantError, AssistantResult, ConfigError, StorageError};
pub use models::{Contact, ContactDraft, ContactPatch, FieldUpdate, Note};
pub use services::{
    BirthdayService, ContactQuery, ContactService, GlobalSearchResults, NoteService,
    SearchService, UpcomingBirthday,
};
pub use storage::{FileStore, MemoryStore, Storage};
