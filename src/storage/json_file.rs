use crate::book::AddressBook;
use crate::error::{StorageError, StorageResult};
use crate::storage::traits::BookStorage;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name used when no path is configured.
pub const DEFAULT_BOOK_FILE: &str = "address_book.json";

/// Address book storage backed by a single pretty-printed JSON file.
///
/// Every save rewrites the whole file. There is no partial-write recovery.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage for the file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonFileStorage {
    fn default() -> Self {
        Self::new(DEFAULT_BOOK_FILE)
    }
}

impl BookStorage for JsonFileStorage {
    fn load(&self) -> StorageResult<Option<AddressBook>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "No address book file yet");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let book: AddressBook = serde_json::from_str(&content)?;
        tracing::info!(
            path = %self.path.display(),
            records = book.len(),
            "Loaded address book"
        );
        Ok(Some(book))
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(book)?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        tracing::info!(
            path = %self.path.display(),
            records = book.len(),
            "Saved address book"
        );
        Ok(())
    }
}
