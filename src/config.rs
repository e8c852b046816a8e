//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables. An optional `.env` file in the working directory is honoured.

use crate::error::{ConfigError, ConfigResult};
use crate::storage::DEFAULT_BOOK_FILE;
use std::env;
use std::path::PathBuf;

/// Configuration for the contact book bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted address book (default: `address_book.json`)
    pub book_path: PathBuf,

    /// Log level used when `RUST_LOG` is not set (default: "warn")
    pub log_level: String,

    /// Maximum number of "did you mean" suggestions (default: 3)
    pub max_suggestions: usize,

    /// Minimum suggestion confidence, 0-100 (default: 60)
    pub suggestion_confidence_threshold: u8,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_FILE`: Path of the address book file (default: `address_book.json`)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    /// - `MAX_SUGGESTIONS`: Max name suggestions on a lookup miss (default: 3)
    /// - `SUGGESTION_CONFIDENCE_THRESHOLD`: Min suggestion confidence (default: 60)
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present, silently
        let _ = dotenvy::dotenv();

        let book_path = env::var("CONTACT_BOOK_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BOOK_FILE));

        if book_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let max_suggestions = Self::parse_env_usize("MAX_SUGGESTIONS", 3)?;
        let suggestion_confidence_threshold =
            Self::parse_env_u8("SUGGESTION_CONFIDENCE_THRESHOLD", 60)?;

        if suggestion_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "SUGGESTION_CONFIDENCE_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            book_path,
            log_level,
            max_suggestions,
            suggestion_confidence_threshold,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_FILE),
            log_level: "warn".to_string(),
            max_suggestions: 3,
            suggestion_confidence_threshold: 60,
        }
    }
}
