//! Personal assistant - main entry point
//!
//! Loads contacts and notes from the storage directory and runs the
//! interactive command loop on stdin/stdout.

use anyhow::{Context, Result};
use personal_assistant::cli::{self, Session};
use personal_assistant::repositories::{
    ContactRepository, JsonContactRepository, JsonNoteRepository, NoteRepository,
};
use personal_assistant::services::{ContactService, NoteService};
use personal_assistant::Config;
use std::io;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Configuration first, so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());

    // Logs go to stderr so they never mix with command output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(storage_dir = %config.storage_dir.display(), "Opening storage");

    let contact_repo = Arc::new(
        JsonContactRepository::new(&config.storage_dir, &config.contacts_file)
            .context("Failed to open contact storage")?,
    ) as Arc<dyn ContactRepository>;
    let note_repo = Arc::new(
        JsonNoteRepository::new(&config.storage_dir, &config.notes_file)
            .context("Failed to open note storage")?,
    ) as Arc<dyn NoteRepository>;

    let mut contacts = ContactService::load(contact_repo);
    let mut notes = NoteService::load(note_repo);
    info!(
        contacts = contacts.book().len(),
        notes = notes.list().len(),
        "Data loaded"
    );

    let mut session = Session::new(&mut contacts, &mut notes, config.birthday_days);
    let stdin = io::stdin();
    cli::run(stdin.lock(), io::stdout(), &mut session).context("Command loop failed")?;

    info!("Personal assistant shutdown complete");
    Ok(())
}
