//! The address book: every contact record keyed by name.

use super::birthdays::BirthdayReport;
use crate::error::{BookError, BookResult, StorageResult};
use crate::models::ContactRecord;
use crate::storage::{BookStorage, JsonFileStorage};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::Path;

/// In-memory contact store.
///
/// Names are unique: adding a record whose name is already present replaces
/// the old record wholesale. Records iterate in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, ContactRecord>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, overwriting any record with the same name.
    pub fn add(&mut self, record: ContactRecord) {
        let name = record.name().as_str().to_string();
        if self.records.insert(name.clone(), record).is_some() {
            tracing::info!(name = %name, "Replaced existing record");
        } else {
            tracing::info!(name = %name, "Added record");
        }
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> BookResult<&ContactRecord> {
        self.records.get(name).ok_or_else(|| not_found(name))
    }

    /// Exact-match lookup by name, for in-place edits.
    pub fn find_mut(&mut self, name: &str) -> BookResult<&mut ContactRecord> {
        self.records.get_mut(name).ok_or_else(|| not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Remove every record named `name` that also holds `phone`.
    ///
    /// Returns the removed records. A name match alone is not enough.
    pub fn delete(&mut self, name: &str, phone: &str) -> BookResult<Vec<ContactRecord>> {
        let keys: Vec<String> = self
            .records
            .iter()
            .filter(|(_, record)| record.name().as_str() == name && record.has_phone(phone))
            .map(|(key, _)| key.clone())
            .collect();

        if keys.is_empty() {
            tracing::debug!(name = %name, phone = %phone, "No record to delete");
            return Err(BookError::NoMatchingRecord {
                name: name.to_string(),
                phone: phone.to_string(),
            });
        }

        let removed: Vec<ContactRecord> = keys
            .iter()
            .filter_map(|key| self.records.remove(key))
            .collect();
        tracing::info!(name = %name, phone = %phone, count = removed.len(), "Deleted records");
        Ok(removed)
    }

    /// Birthdays in the seven days starting today (local time).
    pub fn upcoming_birthdays(&self) -> BirthdayReport {
        self.upcoming_birthdays_from(Local::now().date_naive())
    }

    /// Birthdays in the seven days starting at `today`.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate) -> BirthdayReport {
        BirthdayReport::build(self.records.values(), today)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.values()
    }

    /// Stored names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Write the whole book to `path` as JSON, replacing the file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        JsonFileStorage::new(path.as_ref()).save(self)
    }

    /// Read a book previously written by [`AddressBook::save_to_file`].
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn read_from_file(path: impl AsRef<Path>) -> StorageResult<Option<Self>> {
        JsonFileStorage::new(path.as_ref()).load()
    }
}

fn not_found(name: &str) -> BookError {
    tracing::debug!(name = %name, "Record not found");
    BookError::NotFound(name.to_string())
}

impl FromIterator<ContactRecord> for AddressBook {
    fn from_iter<I: IntoIterator<Item = ContactRecord>>(iter: I) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}

impl Extend<ContactRecord> for AddressBook {
    fn extend<I: IntoIterator<Item = ContactRecord>>(&mut self, iter: I) {
        for record in iter {
            self.records
                .insert(record.name().as_str().to_string(), record);
        }
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a ContactRecord;
    type IntoIter = std::collections::btree_map::Values<'a, String, ContactRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

// Serde support - a JSON object mapping name to record
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.records.serialize(serializer)
    }
}

// Serde support - keys are rebuilt from each record's own name
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = BTreeMap::<String, ContactRecord>::deserialize(deserializer)?;
        Ok(records.into_values().collect())
    }
}
