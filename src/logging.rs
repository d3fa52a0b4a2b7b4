//! `tracing` subscriber setup.
//!
//! `RUST_LOG` wins over `log.filter`. The terminal UI owns the screen, so it
//! logs to a file; the console front-end logs to stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

fn filter(settings: &LogSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.filter))
}

pub fn init_stderr(settings: &LogSettings) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(settings))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn init_file(settings: &LogSettings) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.file)
        .with_context(|| format!("failed to open log file {}", settings.file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(settings))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
