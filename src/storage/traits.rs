use crate::book::AddressBook;
use crate::error::StorageResult;

/// Persistence for the whole address book.
///
/// Provides abstraction over where the book lives between sessions,
/// enabling different implementations (JSON file, in-memory mock).
pub trait BookStorage {
    /// Load the persisted book.
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet; callers start
    /// from an empty book in that case.
    fn load(&self) -> StorageResult<Option<AddressBook>>;

    /// Persist the whole book, replacing whatever was stored before.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
