//! JSON file store keeping all assistant data in a single document.
//!
//! Layout:
//!
//! ```json
//! { "contacts": [ { "id": "...", "name": "...", ... } ], "notes": [ ... ] }
//! ```

use crate::domain::ValidationError;
use crate::error::StorageResult;
use crate::models::{Contact, ContactRecord, Note, NoteRecord};
use crate::storage::traits::{Storage, StoreSnapshot};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default file name, placed in the user's home directory.
pub const DATA_FILE_NAME: &str = ".personal_assistant_data.json";

const CONTACTS_KEY: &str = "contacts";
const NOTES_KEY: &str = "notes";

/// Store backed by one pretty-printed JSON file.
///
/// Each save re-reads the document so the collection that is not being saved
/// keeps exactly its last persisted contents. Writes go to a sibling temporary
/// file that is then renamed over the target.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for `path`. Nothing is touched on disk until the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw document. Missing, empty or corrupt files read as empty.
    fn read_document(&self) -> StorageResult<Map<String, Value>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Data file {} does not exist yet", self.path.display());
                return Ok(Map::new());
            }
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(document)) => Ok(document),
            Ok(_) => {
                warn!(
                    "Data file {} is not a JSON object, treating as empty",
                    self.path.display()
                );
                Ok(Map::new())
            }
            Err(e) => {
                warn!(
                    "Data file {} is corrupt ({}), treating as empty",
                    self.path.display(),
                    e
                );
                Ok(Map::new())
            }
        }
    }

    fn write_document(&self, document: &Map<String, Value>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(document)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DATA_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Replace one top-level collection and write the document back.
    fn save_collection<R: Serialize>(
        &self,
        key: &str,
        other_key: &str,
        records: impl Iterator<Item = R>,
    ) -> StorageResult<()> {
        let values = records
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        let count = values.len();

        let mut document = self.read_document()?;
        document.insert(key.to_string(), Value::Array(values));
        document
            .entry(other_key.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));

        self.write_document(&document)?;
        info!("Saved {} {} to {}", count, key, self.path.display());
        Ok(())
    }
}

impl Storage for FileStore {
    fn load(&self) -> StorageResult<StoreSnapshot> {
        let document = self.read_document()?;
        let contacts = decode_collection(&document, CONTACTS_KEY, |record: ContactRecord| {
            Contact::from_record(record)
        });
        let notes =
            decode_collection(&document, NOTES_KEY, |record: NoteRecord| Note::from_record(record));

        debug!(
            "Loaded {} contacts and {} notes from {}",
            contacts.len(),
            notes.len(),
            self.path.display()
        );
        Ok(StoreSnapshot { contacts, notes })
    }

    fn save_contacts(&self, contacts: &[Contact]) -> StorageResult<()> {
        self.save_collection(
            CONTACTS_KEY,
            NOTES_KEY,
            contacts.iter().map(Contact::to_record),
        )
    }

    fn save_notes(&self, notes: &[Note]) -> StorageResult<()> {
        self.save_collection(NOTES_KEY, CONTACTS_KEY, notes.iter().map(Note::to_record))
    }
}

/// Decode one collection, skipping records that fail to parse or validate.
fn decode_collection<R, T>(
    document: &Map<String, Value>,
    key: &str,
    convert: impl Fn(R) -> Result<T, ValidationError>,
) -> Vec<T>
where
    R: DeserializeOwned,
{
    let items = match document.get(key) {
        Some(Value::Array(items)) => items,
        Some(_) => {
            warn!("'{}' in data file is not a list, ignoring it", key);
            return Vec::new();
        }
        None => return Vec::new(),
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let record = match R::deserialize(item) {
                Ok(record) => record,
                Err(e) => {
                    warn!("Skipping unreadable {} record #{}: {}", key, index, e);
                    return None;
                }
            };
            match convert(record) {
                Ok(entity) => Some(entity),
                Err(e) => {
                    warn!("Skipping invalid {} record #{}: {}", key, index, e);
                    None
                }
            }
        })
        .collect()
}
