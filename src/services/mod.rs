//! Application service layer.
//!
//! The contact and note services own their collections and persist through a
//! shared [`Storage`](crate::storage::Storage) handle. The birthday and search
//! services are read-only views borrowed over them.

mod birthday_service;
mod contact_service;
mod note_service;
mod search_service;

pub use birthday_service::{BirthdayService, UpcomingBirthday};
pub use contact_service::{ContactQuery, ContactService, ContactServiceImpl};
pub use note_service::{NoteService, NoteServiceImpl};
pub use search_service::{GlobalSearchResults, SearchService};
