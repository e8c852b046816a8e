//! Command handlers for the assistant bot.
//!
//! Each handler runs one command against the address book and renders the
//! text shown to the user. Validation failures and lookup misses end up in
//! the reply; they never escape as errors.

use super::command::Command;
use super::help::HELP;
use crate::book::{weekday_name, AddressBook};
use crate::config::Config;
use crate::domain::{Birthday, PhoneNumber};
use crate::error::{BookError, CommandError};
use crate::matching::NameMatcher;
use crate::models::ContactRecord;
use chrono::{Local, NaiveDate};
use std::fmt::Write as _;

const CONTACT_NOT_FOUND: &str = "Contact not found.";
const INVALID_PHONE: &str = "Invalid phone number. Phone number must consist of 10 digits.";
const INVALID_BIRTHDAY: &str = "Invalid birthday format. Please use DD.MM.YYYY format.";

/// Text to show the user after a command, and whether the session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub exit: bool,
}

impl Reply {
    pub(super) fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }

    fn goodbye() -> Self {
        Self {
            text: "Goodbye!".to_string(),
            exit: true,
        }
    }
}

/// Executes bot commands against an address book.
pub struct Assistant {
    matcher: NameMatcher,
    max_suggestions: usize,
    min_confidence: u8,
    today: Option<NaiveDate>,
}

impl Assistant {
    /// Create an assistant using the suggestion settings from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            matcher: NameMatcher::new(),
            max_suggestions: config.max_suggestions,
            min_confidence: config.suggestion_confidence_threshold,
            today: None,
        }
    }

    /// Pin the date used by the `birthdays` command instead of the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Parse and run one input line. Blank lines produce no reply.
    pub fn handle_line(&mut self, book: &mut AddressBook, line: &str) -> Option<Reply> {
        match Command::parse_line(line) {
            Ok(Some(command)) => Some(self.handle(book, command)),
            Ok(None) => None,
            Err(e) => Some(self.command_error(e)),
        }
    }

    /// Run one command.
    pub fn handle(&mut self, book: &mut AddressBook, command: Command) -> Reply {
        tracing::debug!(?command, "Handling command");
        match command {
            Command::Hello => Reply::say("Hi! How can I help you?"),
            Command::Add { name, phone } => self.add_contact(book, &name, &phone),
            Command::Change { name, phone } => self.change_contact(book, &name, &phone),
            Command::Phone { name } => self.show_phone(book, &name),
            Command::All => Self::all_contacts(book),
            Command::AddBirthday { name, birthday } => self.add_birthday(book, &name, &birthday),
            Command::ChangeBirthday { name, birthday } => {
                self.change_birthday(book, &name, &birthday)
            }
            Command::ShowBirthday { name } => self.show_birthday(book, &name),
            Command::Birthdays => self.birthdays(book),
            Command::Delete { name, phone } => Self::delete_contact(book, &name, &phone),
            Command::Search { query } => self.search(book, &query),
            Command::Help => Reply::say(HELP),
            Command::Exit => Reply::goodbye(),
        }
    }

    fn command_error(&mut self, error: CommandError) -> Reply {
        match &error {
            CommandError::Unknown(word) => {
                let mut text = error.to_string();
                let hint = self
                    .matcher
                    .suggest(word, Command::WORDS, 1, self.min_confidence)
                    .into_iter()
                    .next();
                if let Some(hint) = hint {
                    let _ = write!(text, " Did you mean '{}'?", hint.name);
                }
                Reply::say(text)
            }
            CommandError::Usage { .. } => Reply::say(error.to_string()),
        }
    }

    fn add_contact(&mut self, book: &mut AddressBook, name: &str, phone: &str) -> Reply {
        let mut record = match ContactRecord::named(name) {
            Ok(record) => record,
            Err(e) => return Reply::say(e.to_string()),
        };
        if record.add_phone(phone).is_err() {
            return Reply::say(INVALID_PHONE);
        }
        book.add(record);
        Reply::say("Contact added.")
    }

    fn change_contact(&mut self, book: &mut AddressBook, name: &str, phone: &str) -> Reply {
        match book.find_mut(name) {
            Ok(_) if !PhoneNumber::is_valid(phone) => Reply::say(INVALID_PHONE),
            Ok(record) => {
                record.clear_phones();
                match record.add_phone(phone) {
                    Ok(_) => Reply::say("Phone number updated."),
                    Err(e) => Reply::say(e.to_string()),
                }
            }
            Err(_) => self.not_found(book, name),
        }
    }

    fn show_phone(&mut self, book: &AddressBook, name: &str) -> Reply {
        match book.find(name) {
            Ok(record) if record.phones().is_empty() => {
                Reply::say(format!("{} has no phone numbers recorded.", name))
            }
            Ok(record) => Reply::say(format!("{} phone: {}", name, record.joined_phones(", "))),
            Err(_) => self.not_found(book, name),
        }
    }

    fn all_contacts(book: &AddressBook) -> Reply {
        if book.is_empty() {
            return Reply::say("Contacts not found. Please add a first contact.");
        }

        let mut text = String::from("Contacts:\n");
        let _ = write!(text, "{:<10} {:<15} {:<15}", "Name", "Phone", "Birthday");
        for record in book {
            let birthday = record.birthday().map(Birthday::as_str).unwrap_or("");
            let _ = write!(
                text,
                "\n{:<10} {:<15} {:<15}",
                record.name().as_str(),
                record.joined_phones(", "),
                birthday
            );
        }
        Reply::say(text.trim_end().to_string())
    }

    fn add_birthday(&mut self, book: &mut AddressBook, name: &str, birthday: &str) -> Reply {
        if Birthday::parse(birthday).is_err() {
            return Reply::say(INVALID_BIRTHDAY);
        }
        match book.find_mut(name) {
            Ok(record) => {
                record.add_birthday(birthday);
                Reply::say("Birthday added.")
            }
            Err(_) => self.not_found(book, name),
        }
    }

    fn change_birthday(&mut self, book: &mut AddressBook, name: &str, birthday: &str) -> Reply {
        match book.find_mut(name) {
            Ok(_) if Birthday::parse(birthday).is_err() => Reply::say(INVALID_BIRTHDAY),
            Ok(record) => {
                record.add_birthday(birthday);
                Reply::say("Birthday updated.")
            }
            Err(_) => self.not_found(book, name),
        }
    }

    fn show_birthday(&mut self, book: &AddressBook, name: &str) -> Reply {
        match book.find(name) {
            Ok(record) => match record.birthday() {
                Some(birthday) => Reply::say(format!("{}'s birthday: {}", name, birthday)),
                None => Reply::say(format!("{} has no birthday recorded.", name)),
            },
            Err(_) => self.not_found(book, name),
        }
    }

    fn birthdays(&self, book: &AddressBook) -> Reply {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        let report = book.upcoming_birthdays_from(today);

        let mut lines: Vec<String> = report
            .skipped()
            .iter()
            .map(|s| format!("Invalid birthday format for {}. Skipping.", s.name))
            .collect();

        if report.is_empty() {
            lines.push("No birthdays for the next week.".to_string());
        } else {
            lines.push("Birthdays for the next week:".to_string());
            for group in report.groups() {
                lines.push(format!(
                    "{}: {}",
                    weekday_name(group.weekday),
                    group.names().join(", ")
                ));
            }
        }

        Reply::say(lines.join("\n"))
    }

    fn delete_contact(book: &mut AddressBook, name: &str, phone: &str) -> Reply {
        match book.delete(name, phone) {
            Ok(removed) => Reply::say(
                removed
                    .iter()
                    .map(|r| format!("Record for {} with phone number {} deleted.", r.name(), phone))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Err(e) => Reply::say(e.to_string()),
        }
    }

    fn search(&mut self, book: &AddressBook, query: &str) -> Reply {
        let matches = self
            .matcher
            .suggest(query, book.names(), book.len(), self.min_confidence);

        if matches.is_empty() {
            return Reply::say(format!("No contacts match '{}'.", query));
        }

        let mut text = format!("Found {} contact(s):", matches.len());
        for m in &matches {
            if let Ok(record) = book.find(&m.name) {
                let _ = write!(text, "\n{}", record);
            }
        }
        Reply::say(text)
    }

    /// "Contact not found." plus close name suggestions, if any.
    fn not_found(&mut self, book: &AddressBook, name: &str) -> Reply {
        let error = BookError::NotFound(name.to_string());
        tracing::debug!(%error, "Lookup missed");

        let suggestions: Vec<String> = self
            .matcher
            .suggest(name, book.names(), self.max_suggestions, self.min_confidence)
            .into_iter()
            .map(|m| m.name)
            .collect();

        if suggestions.is_empty() {
            Reply::say(CONTACT_NOT_FOUND)
        } else {
            Reply::say(format!(
                "{} Did you mean: {}?",
                CONTACT_NOT_FOUND,
                suggestions.join(", ")
            ))
        }
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
