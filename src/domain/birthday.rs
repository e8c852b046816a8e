//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format used to store and display birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,2}\.\d{1,2}\.\d{4}$").expect("Failed to compile birthday regex")
});

/// A birthday as entered by the user, in `DD.MM.YYYY` form.
///
/// Construction with [`Birthday::new`] keeps the raw text as-is; whether it is
/// a real calendar date is only checked when [`Birthday::date`] is called.
/// Use [`Birthday::parse`] to reject bad dates up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(String);

impl Birthday {
    /// Wrap a raw birthday string without checking it.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Create a birthday, failing unless the value is a `DD.MM.YYYY` date.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let birthday = Self::new(value);
        birthday.date()?;
        Ok(birthday)
    }

    /// Parse the stored text into a calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the text is not a
    /// `DD.MM.YYYY` calendar date.
    pub fn date(&self) -> Result<NaiveDate, ValidationError> {
        if !BIRTHDAY_SHAPE.is_match(&self.0) {
            return Err(ValidationError::InvalidBirthday(self.0.clone()));
        }
        NaiveDate::parse_from_str(&self.0, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(self.0.clone()))
    }

    /// Get the raw birthday text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_accepts_any_text() {
        let birthday = Birthday::new("not-a-date");
        assert_eq!(birthday.as_str(), "not-a-date");
        assert!(birthday.date().is_err());
    }

    #[test]
    fn test_birthday_date() {
        let birthday = Birthday::new("15.06.1990");
        assert_eq!(
            birthday.date().unwrap(),
            NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_birthday_single_digit_fields() {
        let birthday = Birthday::new("1.6.1990");
        assert_eq!(
            birthday.date().unwrap(),
            NaiveDate::from_ymd_opt(1990, 6, 1).unwrap()
        );
    }

    #[test]
    fn test_birthday_parse_rejects_bad_dates() {
        assert!(Birthday::parse("31.02.2000").is_err());
        assert!(Birthday::parse("2000-01-01").is_err());
        assert!(Birthday::parse("01.01.20000").is_err());
        assert!(Birthday::parse("01.01.2000 ").is_err());
        assert_eq!(
            Birthday::parse("32.01.2000"),
            Err(ValidationError::InvalidBirthday("32.01.2000".to_string()))
        );
        assert!(Birthday::parse("29.02.2024").is_ok());
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("09.03.2001");
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"09.03.2001\"");
        let back: Birthday = serde_json::from_str("\"whenever\"").unwrap();
        assert_eq!(back.as_str(), "whenever");
    }
}
