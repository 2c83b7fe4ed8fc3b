//! Contact Book - Main entry point
//!
//! Loads the persisted address book, runs the interactive command loop, and
//! saves the book on exit.

use anyhow::Result;
use contact_book::{repl, Config, JsonFileStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first; it supplies the default log filter
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only; stdout belongs to the command loop)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(data_file = %config.data_file.display(), "Starting contact book");

    let store = JsonFileStore::new(&config.data_file);
    let mut book = match store.load() {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to load address book: {e}");
            return Err(e.into());
        }
    };

    repl::run(&mut book, &store)?;

    info!("Contact book shutdown complete");
    Ok(())
}
