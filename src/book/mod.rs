//! Contact store and its queries.

pub mod address_book;
pub mod birthdays;

pub use address_book::AddressBook;
pub use birthdays::{
    weekday_name, BirthdayGroup, BirthdayReport, SkippedBirthday, UpcomingBirthday,
    BIRTHDAY_WINDOW_DAYS,
};
