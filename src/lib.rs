//! Contact Book - a command-line assistant bot for contacts and birthdays.
//!
//! This library keeps an address book of names, phone numbers and birthdays,
//! persists it to a JSON file between runs, and answers queries such as
//! "whose birthday is coming up this week".
//!
//! # Architecture
//!
//! - **domain**: Validated field values (name, phone number, birthday)
//! - **models**: The contact record
//! - **book**: The address book and the weekly birthday report
//! - **matching**: Fuzzy name suggestions
//! - **storage**: Whole-book persistence
//! - **bot**: Command parsing, handlers and the interactive session
//! - **config**: Configuration from environment variables
//! - **error**: Error types

pub mod book;
pub mod bot;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod storage;

pub use book::{AddressBook, BirthdayReport};
pub use bot::{Assistant, Command, Reply, Session};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError, SessionError, StorageError};
pub use matching::{MatchResult, NameMatcher};
pub use models::ContactRecord;
pub use storage::{BookStorage, JsonFileStorage};
