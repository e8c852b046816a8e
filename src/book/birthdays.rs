//! Weekly birthday report.
//!
//! Groups the contacts whose next birthday falls within the coming seven days
//! by weekday. Weekend birthdays are listed under Monday, the day they get
//! celebrated at work; only the label moves, the seven-day window does not.

use crate::models::ContactRecord;
use chrono::{Datelike, NaiveDate, Weekday};

/// Number of days, starting today, covered by the report.
pub const BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// A contact whose birthday falls inside the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Next calendar occurrence of the birthday, on or after today
    pub date: NaiveDate,

    /// Whole days from today to `date`
    pub delta_days: i64,
}

/// Birthdays reported under one weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayGroup {
    pub weekday: Weekday,
    pub entries: Vec<UpcomingBirthday>,
}

impl BirthdayGroup {
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }
}

/// A contact whose birthday could not be placed on the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBirthday {
    pub name: String,
    pub value: String,
}

/// Result of the weekly birthday query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthdayReport {
    groups: Vec<BirthdayGroup>,
    skipped: Vec<SkippedBirthday>,
}

impl BirthdayReport {
    /// Build the report for `today` from the given records.
    pub fn build<'a>(records: impl IntoIterator<Item = &'a ContactRecord>, today: NaiveDate) -> Self {
        let mut report = Self::default();

        for record in records {
            let name = record.name().as_str();
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let born = match birthday.date() {
                Ok(date) => date,
                Err(_) => {
                    tracing::warn!(
                        name = %name,
                        birthday = %birthday,
                        "Invalid birthday format, skipping"
                    );
                    report.skip(record);
                    continue;
                }
            };

            let Some(date) = next_occurrence(born, today) else {
                tracing::warn!(name = %name, birthday = %birthday, "Birthday out of calendar range, skipping");
                report.skip(record);
                continue;
            };

            let delta_days = (date - today).num_days();
            if !(0..BIRTHDAY_WINDOW_DAYS).contains(&delta_days) {
                continue;
            }

            report.push(
                reported_weekday(date),
                UpcomingBirthday {
                    name: name.to_string(),
                    date,
                    delta_days,
                },
            );
        }

        report
            .groups
            .sort_by_key(|group| group.weekday.num_days_from_monday());
        report
    }

    fn skip(&mut self, record: &ContactRecord) {
        self.skipped.push(SkippedBirthday {
            name: record.name().as_str().to_string(),
            value: record.birthday().map(|b| b.as_str().to_string()).unwrap_or_default(),
        });
    }

    fn push(&mut self, weekday: Weekday, entry: UpcomingBirthday) {
        match self.groups.iter_mut().find(|g| g.weekday == weekday) {
            Some(group) => group.entries.push(entry),
            None => self.groups.push(BirthdayGroup {
                weekday,
                entries: vec![entry],
            }),
        }
    }

    /// Groups ordered Monday first.
    pub fn groups(&self) -> &[BirthdayGroup] {
        &self.groups
    }

    /// Contacts whose birthday text could not be parsed.
    pub fn skipped(&self) -> &[SkippedBirthday] {
        &self.skipped
    }

    pub fn group(&self, weekday: Weekday) -> Option<&BirthdayGroup> {
        self.groups.iter().find(|g| g.weekday == weekday)
    }

    /// Names reported under `weekday`, empty when there are none.
    pub fn names_on(&self, weekday: Weekday) -> Vec<&str> {
        self.group(weekday).map(BirthdayGroup::names).unwrap_or_default()
    }

    /// True when no birthday falls inside the window.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// The birthday's date in `year`. Feb 29 becomes Feb 28 in non-leap years.
fn anniversary(born: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, born.month(), born.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, born.month(), born.day() - 1))
}

/// First occurrence of the birthday on or after `today`.
pub fn next_occurrence(born: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary(born, today.year())?;
    if this_year < today {
        anniversary(born, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Weekday a birthday is reported under: weekends move to Monday.
pub fn reported_weekday(date: NaiveDate) -> Weekday {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => Weekday::Mon,
        other => other,
    }
}

/// English weekday name, as shown to the user.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
