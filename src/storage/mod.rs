//! Persistence for the contact and note collections.
//!
//! The [`Storage`] trait is the seam between the services and the medium;
//! [`FileStore`] writes a single JSON document and [`MemoryStore`] keeps
//! everything in process.

mod file_store;
mod memory_store;
mod traits;

pub use file_store::{FileStore, DATA_FILE_NAME};
pub use memory_store::MemoryStore;
pub use traits::{Storage, StoreSnapshot};
