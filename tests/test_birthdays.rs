//! Tests for the weekly birthday report.

use chrono::{NaiveDate, Weekday};
use contact_book::{AddressBook, ContactRecord};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn book_with_birthdays(entries: &[(&str, &str)]) -> AddressBook {
    entries
        .iter()
        .map(|(name, birthday)| {
            let mut record = ContactRecord::named(*name).unwrap();
            record.add_birthday(*birthday);
            record
        })
        .collect()
}

/// 2024-06-10 is a Monday.
fn monday() -> NaiveDate {
    date(2024, 6, 10)
}

#[test]
fn test_saturday_birthday_listed_under_monday() {
    let book = book_with_birthdays(&[("Sam", "15.06.2024")]);
    let report = book.upcoming_birthdays_from(monday());

    let group = report.group(Weekday::Mon).expect("Monday group");
    assert_eq!(group.entries.len(), 1);
    assert_eq!(group.entries[0].name, "Sam");
    assert_eq!(group.entries[0].delta_days, 5);
    assert_eq!(group.entries[0].date, date(2024, 6, 15));
}

#[test]
fn test_yesterday_rolls_to_next_year_and_is_excluded() {
    let book = book_with_birthdays(&[("Yuri", "09.06.2024")]);
    let report = book.upcoming_birthdays_from(monday());

    assert!(report.is_empty());
    assert!(report.skipped().is_empty());
}

#[test]
fn test_birth_year_does_not_matter() {
    let book = book_with_birthdays(&[("Old", "12.06.1950"), ("Young", "12.06.2020")]);
    let report = book.upcoming_birthdays_from(monday());

    assert_eq!(report.names_on(Weekday::Wed), vec!["Old", "Young"]);
}

#[test]
fn test_today_is_included() {
    let book = book_with_birthdays(&[("Tina", "10.06.1999")]);
    let report = book.upcoming_birthdays_from(monday());

    let group = report.group(Weekday::Mon).unwrap();
    assert_eq!(group.entries[0].delta_days, 0);
}

#[test]
fn test_malformed_birthday_skipped_and_reported() {
    let book = book_with_birthdays(&[("Bad", "not-a-date"), ("Good", "11.06.1990")]);
    let report = book.upcoming_birthdays_from(monday());

    assert_eq!(report.names_on(Weekday::Tue), vec!["Good"]);
    assert_eq!(report.skipped().len(), 1);
    assert_eq!(report.skipped()[0].name, "Bad");
    assert_eq!(report.skipped()[0].value, "not-a-date");
}

#[test]
fn test_impossible_date_is_malformed() {
    let book = book_with_birthdays(&[("Feb", "30.02.1990")]);
    let report = book.upcoming_birthdays_from(monday());

    assert!(report.is_empty());
    assert_eq!(report.skipped()[0].name, "Feb");
}

#[test]
fn test_window_crosses_new_year() {
    // 2024-12-28 is a Saturday
    let book = book_with_birthdays(&[("Newyear", "01.01.1990"), ("Eve", "31.12.1990")]);
    let report = book.upcoming_birthdays_from(date(2024, 12, 28));

    // 2024-12-31 is a Tuesday, 2025-01-01 a Wednesday
    assert_eq!(report.names_on(Weekday::Tue), vec!["Eve"]);
    let wed = report.group(Weekday::Wed).unwrap();
    assert_eq!(wed.entries[0].name, "Newyear");
    assert_eq!(wed.entries[0].date, date(2025, 1, 1));
    assert_eq!(wed.entries[0].delta_days, 4);
}

#[test]
fn test_sunday_start_keeps_weekend_under_monday() {
    // Starting on a Sunday, today's birthday is relabeled too
    let book = book_with_birthdays(&[("Sun", "16.06.1990"), ("Mon", "17.06.1990")]);
    let report = book.upcoming_birthdays_from(date(2024, 6, 16));

    assert_eq!(report.groups().len(), 1);
    assert_eq!(report.names_on(Weekday::Mon), vec!["Mon", "Sun"]);
}

#[test]
fn test_leap_day_birthday_in_common_year() {
    let book = book_with_birthdays(&[("Leap", "29.02.2000")]);
    // 2023-02-27 is a Monday, Feb 28 a Tuesday
    let report = book.upcoming_birthdays_from(date(2023, 2, 27));

    let group = report.group(Weekday::Tue).unwrap();
    assert_eq!(group.entries[0].date, date(2023, 2, 28));
}
