//! Contact assistant - interactive entry point.

use anyhow::Result;
use contact_assistant::{Config, Repl};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr; stdout is the conversation.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(prompt = %config.prompt, "Configuration loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(stdin.lock(), stdout.lock(), config.prompt);

    if let Err(e) = repl.run() {
        error!("Terminal I/O failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
