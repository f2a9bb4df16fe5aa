//! Contact Assistant - Main entry point
//!
//! Loads the address book, runs the interactive command loop on stdin/stdout,
//! and saves the book when the user leaves.

use anyhow::Result;
use contact_assistant::{run_assistant, Assistant, Config, JsonFileRepository};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only so replies on stdout stay clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using address book at {}", config.book_path.display());

    let repository = JsonFileRepository::new(config.book_path.clone());
    let assistant = match Assistant::start(Box::new(repository)) {
        Ok(assistant) => assistant,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = run_assistant(assistant).await {
        error!("Assistant stopped: {:#}", e);
        return Err(e);
    }

    info!("Contact assistant shutdown complete");
    Ok(())
}
