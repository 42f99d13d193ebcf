//! Phonebook - Main entry point
//!
//! Runs the interactive command shell over stdin/stdout against the
//! configured contacts file.

use anyhow::Result;
use phonebook::repositories::{CsvDirectoryRepository, DirectoryRepository};
use phonebook::{CommandContext, CommandTable, Config, LookupService, Session};
use std::io;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logging goes to stderr so command output on stdout stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(path = %config.data_file.display(), "Starting phonebook");

    let repository =
        Arc::new(CsvDirectoryRepository::new(&config.data_file)) as Arc<dyn DirectoryRepository>;
    let context = CommandContext::new(LookupService::new(repository));
    let session = Session::new(CommandTable::new(), context, config.prompt.clone());

    session.run(io::stdin().lock(), io::stdout())?;

    info!("Phonebook session ended");
    Ok(())
}
