//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The phone number contains something other than decimal digits.
    PhoneNotDigits(String),

    /// The phone number does not have exactly ten digits.
    PhoneWrongLength(String),

    /// The birthday is not a `DD.MM.YYYY` calendar date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::PhoneNotDigits(phone) => {
                write!(f, "Phone number must contain only digits: {}", phone)
            }
            Self::PhoneWrongLength(phone) => {
                write!(f, "Phone number must contain exactly 10 digits: {}", phone)
            }
            Self::InvalidBirthday(value) => write!(
                f,
                "Invalid birthday format: {}. Please use DD.MM.YYYY format.",
                value
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
