//! Contact Directory - Main entry point
//!
//! Loads the saved directory, runs the interactive assistant on stdin/stdout,
//! and saves the directory when the session ends.

use anyhow::{Context, Result};
use contact_directory::repositories::{DirectoryStore, JsonFileStore};
use contact_directory::{AssistantBot, CommandHandler, Config, ConsoleDisplay, SystemClock};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only so the conversation on stdout stays clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using contacts file {}", config.contacts_file.display());

    let store = JsonFileStore::new(&config.contacts_file);
    let directory = store.load().with_context(|| {
        format!(
            "Failed to load contacts from {}",
            config.contacts_file.display()
        )
    })?;

    let handler = CommandHandler::with_window(SystemClock, config.birthday_window_days);
    let mut bot = AssistantBot::new(directory, ConsoleDisplay::stdout(), handler);

    let session = bot.run(io::stdin().lock());
    if let Err(e) = &session {
        error!("Input error, saving and exiting: {}", e);
    }

    store
        .save(bot.directory())
        .context("Failed to save contacts")?;

    session.context("Failed to read input")?;
    Ok(())
}
