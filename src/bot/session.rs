//! Interactive session: the read-eval-print loop around one address book.

use super::assistant::{Assistant, Reply};
use super::help::{PROMPT, WELCOME};
use crate::book::AddressBook;
use crate::error::{SessionResult, StorageResult};
use crate::storage::BookStorage;
use std::io::{BufRead, Write};

const INVALID_INPUT: &str = "Invalid input.";

/// Owns the address book for the lifetime of the bot and persists it on exit.
pub struct Session<S: BookStorage> {
    storage: S,
    book: AddressBook,
    assistant: Assistant,
}

impl<S: BookStorage> Session<S> {
    /// Load the persisted book, or start empty when nothing was saved yet.
    pub fn open(storage: S, assistant: Assistant) -> StorageResult<Self> {
        let book = storage.load()?.unwrap_or_default();
        tracing::info!(records = book.len(), "Session opened");
        Ok(Self {
            storage,
            book,
            assistant,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run one input line against the book.
    pub fn execute(&mut self, line: &str) -> Option<Reply> {
        self.assistant.handle_line(&mut self.book, line)
    }

    /// Persist the whole book.
    pub fn save(&self) -> StorageResult<()> {
        self.storage.save(&self.book)
    }

    /// Read commands from `input` until an exit command or end of input,
    /// writing replies to `output`.
    ///
    /// The book is saved before returning, also when reading or writing
    /// fails part way. A line that is not valid UTF-8 is answered and skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> SessionResult<()> {
        let dialogue = self.converse(input, output);
        let saved = self.save();

        if let Err(e) = &dialogue {
            if let Err(save_error) = &saved {
                tracing::error!(error = %save_error, "Failed to save address book");
            }
            tracing::error!(error = %e, "Session ended on an I/O error");
        }
        dialogue?;
        saved?;
        Ok(())
    }

    fn converse<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> SessionResult<()> {
        writeln!(output, "{}\n", WELCOME)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                tracing::info!("End of input, closing session");
                writeln!(output)?;
                return Ok(());
            }

            let reply = match std::str::from_utf8(&buf) {
                Ok(line) => self.execute(line.trim_end_matches(&['\n', '\r'][..])),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping input line that is not UTF-8");
                    Some(Reply::say(INVALID_INPUT))
                }
            };

            if let Some(reply) = reply {
                writeln!(output, "{}", reply.text)?;
                if reply.exit {
                    return Ok(());
                }
            }
        }
    }
}
