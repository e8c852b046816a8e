//! Contact record: one person's name, phone numbers and birthday.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    /// Unique name of the contact
    name: Name,

    /// Phone numbers in the order they were added
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    /// Birthday as entered, parsed lazily by birthday queries
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Validate the raw name and create a record for it.
    pub fn named(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::new(Name::new(name)?))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// On a validation failure the record is left unchanged and the error is
    /// handed back so the caller can decide how to report it.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<&PhoneNumber, ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        self.phones.push(phone);
        Ok(&self.phones[self.phones.len() - 1])
    }

    /// Set the birthday, replacing any previous one.
    ///
    /// The text is stored as-is; calendar validity is checked at query time.
    pub fn add_birthday(&mut self, birthday: impl Into<String>) {
        self.birthday = Some(Birthday::new(birthday));
    }

    /// Drop every stored phone number.
    pub fn clear_phones(&mut self) {
        self.phones.clear();
    }

    /// Check whether this record holds exactly this phone number.
    pub fn has_phone(&self, phone: &str) -> bool {
        self.phones.iter().any(|p| p == phone)
    }

    /// Phones joined with `separator`, for tables and one-line summaries.
    pub fn joined_phones(&self, separator: &str) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phone: {}, birthday: {}",
            self.name,
            self.joined_phones("; "),
            self.birthday.as_ref().map(Birthday::as_str).unwrap_or("")
        )
    }
}
