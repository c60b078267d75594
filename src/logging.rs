//! File-backed logging.
//!
//! The TUI owns the terminal, so diagnostics go to a file under the platform
//! data directory instead of stdout or stderr. `RUST_LOG` adjusts the filter.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub(crate) const LOG_FILE: &str = "campaigntui.log";

pub(crate) fn init(dir: &Path) -> Result<()> {
    let file = open_log_file(dir)?;
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .with_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                ),
        )
        .init();
    Ok(())
}

fn open_log_file(dir: &Path) -> Result<File> {
    let path = dir.join(LOG_FILE);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
