//! Contact Book - Main entry point
//!
//! Runs the interactive assistant bot on stdin/stdout. Logs go to stderr so
//! they never interleave with bot replies.

use anyhow::Result;
use clap::Parser;
use contact_book::{Assistant, Config, JsonFileStorage, Session};
use std::io;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "contact-book",
    about = "Assistant bot for contacts, phone numbers and birthdays",
    version
)]
struct Cli {
    /// Address book file (overrides CONTACT_BOOK_FILE)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    if let Some(file) = cli.file {
        config.book_path = file;
    }

    // Initialize logging (stderr only, stdout belongs to the bot)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using address book at {}", config.book_path.display());

    let storage = JsonFileStorage::new(&config.book_path);
    let mut session = Session::open(storage, Assistant::new(&config)).map_err(|e| {
        error!("Failed to load address book: {}", e);
        e
    })?;

    let stdin = io::stdin();
    if let Err(e) = session.run(stdin.lock(), io::stdout()) {
        error!("Session failed: {}", e);
        return Err(e.into());
    }

    info!("Address book saved, bye");
    Ok(())
}
