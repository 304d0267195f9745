//! Terminal maze runner (default binary).
//!
//! Loads a map, plays it with the console or screen presenter, and reports how the
//! session ended.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tui_maze::config::{Cli, SessionConfig};
use tui_maze::session;

fn main() -> Result<()> {
    let config = SessionConfig::from_cli(Cli::parse());
    init_tracing(&config)?;

    session::run(&config)?;
    Ok(())
}

fn init_tracing(config: &SessionConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match &config.log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
