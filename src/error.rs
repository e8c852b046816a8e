//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when querying or mutating the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field value failed validation
    #[error("{0}")]
    InvalidValue(#[from] ValidationError),

    /// No record with this name exists
    #[error("Record for {0} not found")]
    NotFound(String),

    /// No record with this name holds the given phone number
    #[error("No record found for {name} with phone number {phone}.")]
    NoMatchingRecord { name: String, phone: String },
}

/// Errors that can occur while reading or writing the persisted address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a valid address book
    #[error("Malformed address book data: {0}")]
    Format(#[from] serde_json::Error),
}

/// Errors that can occur while turning a line of user input into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments for a known command
    #[error("Invalid number of arguments. Enter the 'help' command for additional information on the command.")]
    Usage { command: &'static str },

    /// The command word is not recognised
    #[error("Invalid command.")]
    Unknown(String),
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Reading input or writing replies failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Persisting the address book failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::NotFound("Alice".to_string());
        assert_eq!(err.to_string(), "Record for Alice not found");

        let err = BookError::NoMatchingRecord {
            name: "Bob".to_string(),
            phone: "1234567890".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No record found for Bob with phone number 1234567890."
        );

        let err = CommandError::Unknown("dance".to_string());
        assert_eq!(err.to_string(), "Invalid command.");

        let err = ConfigError::InvalidValue {
            var: "MAX_SUGGESTIONS".to_string(),
            reason: "Must be a positive number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for MAX_SUGGESTIONS: Must be a positive number"
        );
    }

    #[test]
    fn test_validation_error_converts() {
        let err: BookError = ValidationError::EmptyName.into();
        assert_eq!(err, BookError::InvalidValue(ValidationError::EmptyName));
        assert_eq!(err.to_string(), "Name cannot be empty");
    }

    #[test]
    fn test_storage_error_mentions_path() {
        let err = StorageError::Io {
            path: PathBuf::from("/tmp/book.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("/tmp/book.json"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_usage_error_message() {
        let err = CommandError::Usage { command: "add" };
        assert!(err.to_string().starts_with("Invalid number of arguments."));
    }
}
