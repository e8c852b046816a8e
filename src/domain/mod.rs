//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields of a contact record. Names and phone
//! numbers are validated at construction time; birthdays keep their raw text
//! and are parsed when a query needs the calendar date.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use name::Name;
pub use phone::PhoneNumber;
