use contact_book::error::{StorageError, StorageResult};
use contact_book::{AddressBook, BookStorage};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Mock book storage for testing.
///
/// Keeps the "persisted" book in memory, can be told to fail saves, and
/// counts calls for verification. Clones share state, so a test can keep a
/// handle while a session owns another.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookStorage {
    stored: Rc<RefCell<Option<AddressBook>>>,
    fail_saves: Rc<Cell<bool>>,
    load_calls: Rc<Cell<usize>>,
    save_calls: Rc<Cell<usize>>,
}

#[allow(dead_code)]
impl MockBookStorage {
    /// Create a storage with nothing persisted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let storage = Self::new();
        storage.stored.replace(Some(book));
        storage
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        self.fail_saves.set(true);
    }

    /// The last saved (or seeded) book.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.borrow().clone()
    }

    pub fn load_calls(&self) -> usize {
        self.load_calls.get()
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.get()
    }
}

impl BookStorage for MockBookStorage {
    fn load(&self) -> StorageResult<Option<AddressBook>> {
        self.load_calls.set(self.load_calls.get() + 1);
        Ok(self.stored.borrow().clone())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.save_calls.set(self.save_calls.get() + 1);
        if self.fail_saves.get() {
            return Err(StorageError::Io {
                path: "mock://book".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            });
        }
        self.stored.replace(Some(book.clone()));
        Ok(())
    }
}
