//! Contact model representing a person in the address book.

use crate::domain::{
    Birthday, ContactId, ContactName, EmailAddress, PhoneNumber, ValidationError,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw, unvalidated input for creating or fully replacing a contact.
///
/// Blank optional values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub birthday: Option<String>,
}

impl ContactDraft {
    /// Start a draft with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn birthday(mut self, birthday: impl Into<String>) -> Self {
        self.birthday = Some(birthday.into());
        self
    }
}

/// A requested change to one optional contact field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Leave the field as it is
    #[default]
    Unchanged,
    /// Remove the field's value
    Clear,
    /// Validate and store a new value
    Set(String),
}

impl FieldUpdate {
    /// Interpret raw user input: blank clears the field, anything else sets it.
    pub fn from_input(value: &str) -> Self {
        if value.trim().is_empty() {
            Self::Clear
        } else {
            Self::Set(value.to_string())
        }
    }

    fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// Resolve against the current value, validating `Set` through `parse`.
    fn resolve<T: Clone>(
        &self,
        current: &Option<T>,
        parse: impl FnOnce(&str) -> Result<T, ValidationError>,
    ) -> Result<Option<T>, ValidationError> {
        match self {
            Self::Unchanged => Ok(current.clone()),
            Self::Clear => Ok(None),
            Self::Set(value) if value.trim().is_empty() => Ok(None),
            Self::Set(value) => parse(value).map(Some),
        }
    }
}

/// A partial update: only the fields that are not `Unchanged` are touched.
///
/// The name can be replaced but never cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub phone: FieldUpdate,
    pub email: FieldUpdate,
    pub address: FieldUpdate,
    pub birthday: FieldUpdate,
}

impl ContactPatch {
    /// True when the patch would not touch any field.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_unchanged()
            && self.email.is_unchanged()
            && self.address.is_unchanged()
            && self.birthday.is_unchanged()
    }
}

/// A contact with validated fields.
///
/// Instances can only be obtained through constructors that validate every
/// field, so a contact with a malformed phone, email or birthday never exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: ContactId,
    name: ContactName,
    phone: Option<PhoneNumber>,
    email: Option<EmailAddress>,
    address: Option<String>,
    birthday: Option<Birthday>,
}

/// Flat, persisted shape of a contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
}

impl Contact {
    /// Create a new contact with a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` encountered; nothing is built.
    pub fn new(draft: ContactDraft) -> Result<Self, ValidationError> {
        Self::with_id(ContactId::generate(), draft)
    }

    /// Build a contact from a draft, keeping an existing id.
    pub fn with_id(id: ContactId, draft: ContactDraft) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: ContactName::new(&draft.name)?,
            phone: optional(draft.phone.as_deref(), PhoneNumber::new)?,
            email: optional(draft.email.as_deref(), EmailAddress::new)?,
            address: optional(draft.address.as_deref(), trimmed)?,
            birthday: optional(draft.birthday.as_deref(), Birthday::parse)?,
        })
    }

    /// Produce a copy with `patch` applied.
    ///
    /// Every touched field is re-validated. On error `self` is left as it was.
    pub fn apply_patch(&self, patch: &ContactPatch) -> Result<Self, ValidationError> {
        let name = match &patch.name {
            Some(name) => ContactName::new(name)?,
            None => self.name.clone(),
        };

        Ok(Self {
            id: self.id,
            name,
            phone: patch.phone.resolve(&self.phone, PhoneNumber::new)?,
            email: patch.email.resolve(&self.email, EmailAddress::new)?,
            address: patch.address.resolve(&self.address, trimmed)?,
            birthday: patch.birthday.resolve(&self.birthday, Birthday::parse)?,
        })
    }

    /// Rebuild a contact from its persisted record.
    ///
    /// # Errors
    ///
    /// Fails if the id is not a UUID or any field no longer validates.
    pub fn from_record(record: ContactRecord) -> Result<Self, ValidationError> {
        Ok(Self {
            id: ContactId::parse(&record.id)?,
            name: ContactName::new(&record.name)?,
            phone: optional(record.phone.as_deref(), PhoneNumber::new)?,
            email: optional(record.email.as_deref(), EmailAddress::new)?,
            address: optional(record.address.as_deref(), trimmed)?,
            birthday: optional(record.birthday.as_deref(), Birthday::from_stored)?,
        })
    }

    /// Flatten into the persisted record shape.
    pub fn to_record(&self) -> ContactRecord {
        ContactRecord {
            id: self.id.to_string(),
            name: self.name.to_string(),
            phone: self.phone.as_ref().map(|p| p.as_str().to_string()),
            email: self.email.as_ref().map(|e| e.as_str().to_string()),
            address: self.address.clone(),
            birthday: self.birthday.map(|b| b.to_string()),
        }
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Whether a lower-cased needle occurs in the name, phone, email or address.
    pub fn contains_text(&self, needle_lower: &str) -> bool {
        self.name.as_str().to_lowercase().contains(needle_lower)
            || self
                .phone
                .as_ref()
                .is_some_and(|p| p.as_str().contains(needle_lower))
            || self
                .email
                .as_ref()
                .is_some_and(|e| e.as_str().contains(needle_lower))
            || self
                .address
                .as_ref()
                .is_some_and(|a| a.to_lowercase().contains(needle_lower))
    }
}

impl TryFrom<ContactRecord> for Contact {
    type Error = ValidationError;

    fn try_from(record: ContactRecord) -> Result<Self, Self::Error> {
        Contact::from_record(record)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact ID: {}\nName: {}", self.id, self.name)?;
        if let Some(phone) = &self.phone {
            write!(f, "\nPhone: {}", phone)?;
        }
        if let Some(email) = &self.email {
            write!(f, "\nEmail: {}", email)?;
        }
        if let Some(address) = &self.address {
            write!(f, "\nAddress: {}", address)?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, "\nBirthday: {}", birthday)?;
        }
        Ok(())
    }
}

/// Validate an optional raw value; blank input means "absent".
fn optional<T>(
    value: Option<&str>,
    parse: impl FnOnce(&str) -> Result<T, ValidationError>,
) -> Result<Option<T>, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => parse(v).map(Some),
        _ => Ok(None),
    }
}

fn trimmed(value: &str) -> Result<String, ValidationError> {
    Ok(value.trim().to_string())
}
