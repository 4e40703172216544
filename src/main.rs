//! Contact book - main entry point
//!
//! Loads configuration, restores the saved address book and starts the
//! interactive shell. The book is saved again when the shell exits, unless
//! the stored file could not be read at startup.

use anyhow::Result;
use contact_book::{repl, AddressBook, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Configuration first: it supplies the fallback log level.
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());

    // Initialize logging (stderr only, stdout carries command output)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
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

    info!(path = %config.storage_path.display(), "Opening address book");

    let mut book = AddressBook::from_config(&config);
    let autosave = repl::restore_book(&mut book);

    repl::run_repl(&mut book, &config, autosave)
        .map_err(|e| anyhow::anyhow!("interactive shell failed: {e}"))?;

    info!("Contact book shutdown complete");
    Ok(())
}
