//! Command-line assistant bot.
//!
//! Turns lines of user input into commands, runs them against the address
//! book and renders the replies. A [`Session`] owns the single book instance
//! for the whole run and saves it on exit.

mod assistant;
mod command;
mod help;
mod session;

pub use assistant::{Assistant, Reply};
pub use command::Command;
pub use help::{HELP, PROMPT, WELCOME};
pub use session::Session;
