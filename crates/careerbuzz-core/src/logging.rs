//! File logging via `tracing`.
//!
//! The TUI owns the terminal, so log records go to a daily-rotated file under
//! `<CAREERBUZZ_HOME>/logs/`. Verbosity comes from `CAREERBUZZ_LOG`
//! (EnvFilter syntax), e.g. `CAREERBUZZ_LOG=debug careerbuzz`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::paths;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "CAREERBUZZ_LOG";

const DEFAULT_FILTER: &str = "careerbuzz=info,warn";
const LOG_FILE_PREFIX: &str = "careerbuzz.log";

/// Installs the global subscriber writing to the default log directory.
///
/// # Errors
/// Returns an error if the directory cannot be created or a subscriber is
/// already installed.
pub fn init() -> Result<PathBuf> {
    let dir = paths::logs_dir();
    init_in(&dir)?;
    Ok(dir)
}

/// Installs the global subscriber writing into `dir`.
///
/// # Errors
/// Returns an error if the directory cannot be created or a subscriber is
/// already installed.
pub fn init_in(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!(log_dir = %dir.display(), "CareerBuzz starting");
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
