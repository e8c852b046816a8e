//! Parsing of user input lines into bot commands.

use crate::error::{CommandError, CommandResult};
use std::str::FromStr;

/// A command the assistant bot understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ChangeBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Delete { name: String, phone: String },
    Search { query: String },
    Help,
    Exit,
}

impl Command {
    /// Every command word, including aliases.
    pub const WORDS: [&'static str; 15] = [
        "hello",
        "add",
        "change",
        "phone",
        "all",
        "add-birthday",
        "change-birthday",
        "show-birthday",
        "birthdays",
        "delete",
        "search",
        "help",
        "exit",
        "close",
        "bye",
    ];

    /// Parse one line of input.
    ///
    /// Returns `Ok(None)` for a blank line.
    pub fn parse_line(line: &str) -> CommandResult<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            return Ok(None);
        };
        let word = word.to_lowercase();
        let args: Vec<&str> = tokens.collect();

        let command = match word.as_str() {
            "hello" => Command::Hello,
            "add" => {
                let [name, phone] = exact::<2>("add", &args)?;
                Command::Add { name, phone }
            }
            "change" => {
                let [name, phone] = exact::<2>("change", &args)?;
                Command::Change { name, phone }
            }
            "phone" => {
                let [name] = exact::<1>("phone", &args)?;
                Command::Phone { name }
            }
            "all" => Command::All,
            "add-birthday" => {
                let [name, birthday] = exact::<2>("add-birthday", &args)?;
                Command::AddBirthday { name, birthday }
            }
            "change-birthday" => {
                let [name, birthday] = exact::<2>("change-birthday", &args)?;
                Command::ChangeBirthday { name, birthday }
            }
            "show-birthday" => {
                let [name] = exact::<1>("show-birthday", &args)?;
                Command::ShowBirthday { name }
            }
            "birthdays" => Command::Birthdays,
            "delete" => {
                let [name, phone] = exact::<2>("delete", &args)?;
                Command::Delete { name, phone }
            }
            "search" => {
                if args.is_empty() {
                    return Err(CommandError::Usage { command: "search" });
                }
                Command::Search {
                    query: args.join(" "),
                }
            }
            "help" => Command::Help,
            "exit" | "close" | "bye" => Command::Exit,
            _ => return Err(CommandError::Unknown(word)),
        };

        Ok(Some(command))
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse_line(s)?.ok_or_else(|| CommandError::Unknown(String::new()))
    }
}

/// Require exactly `N` arguments.
fn exact<const N: usize>(command: &'static str, args: &[&str]) -> CommandResult<[String; N]> {
    if args.len() != N {
        return Err(CommandError::Usage { command });
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let command: Command = "add John 1234567890".parse().unwrap();
        assert_eq!(
            command,
            Command::Add {
                name: "John".to_string(),
                phone: "1234567890".to_string(),
            }
        );
    }

    #[test]
    fn test_command_word_is_case_insensitive() {
        assert_eq!("HELLO".parse::<Command>().unwrap(), Command::Hello);
        assert_eq!(
            "  Show-Birthday   Jane ".parse::<Command>().unwrap(),
            Command::ShowBirthday {
                name: "Jane".to_string()
            }
        );
    }

    #[test]
    fn test_arguments_keep_their_case() {
        let command: Command = "phone JoHn".parse().unwrap();
        assert_eq!(
            command,
            Command::Phone {
                name: "JoHn".to_string()
            }
        );
    }

    #[test]
    fn test_exit_aliases() {
        for word in ["exit", "close", "bye", "BYE"] {
            assert_eq!(word.parse::<Command>().unwrap(), Command::Exit);
        }
    }

    #[test]
    fn test_wrong_argument_count_is_usage_error() {
        assert_eq!(
            "add John".parse::<Command>(),
            Err(CommandError::Usage { command: "add" })
        );
        assert_eq!(
            "add John 1234567890 extra".parse::<Command>(),
            Err(CommandError::Usage { command: "add" })
        );
        assert_eq!(
            "show-birthday".parse::<Command>(),
            Err(CommandError::Usage {
                command: "show-birthday"
            })
        );
        assert_eq!(
            "search".parse::<Command>(),
            Err(CommandError::Usage { command: "search" })
        );
    }

    #[test]
    fn test_argument_free_commands_ignore_extras() {
        assert_eq!("all please".parse::<Command>().unwrap(), Command::All);
        assert_eq!("birthdays now".parse::<Command>().unwrap(), Command::Birthdays);
    }

    #[test]
    fn test_search_joins_query() {
        assert_eq!(
            "search jo an".parse::<Command>().unwrap(),
            Command::Search {
                query: "jo an".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_and_blank() {
        assert_eq!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown("dance".to_string()))
        );
        assert_eq!(Command::parse_line("   "), Ok(None));
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn test_every_word_parses() {
        for word in Command::WORDS {
            let result = Command::parse_line(word);
            assert!(
                !matches!(result, Err(CommandError::Unknown(_))),
                "{word} should be a known command"
            );
        }
    }
}
