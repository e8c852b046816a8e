//! Persistence adapters for the address book.

mod json_file;
mod traits;

pub use json_file::{JsonFileStorage, DEFAULT_BOOK_FILE};
pub use traits::BookStorage;
