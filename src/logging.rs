//! Diagnostic logging setup
//!
//! Installs a `tracing` subscriber. The TUI owns the terminal, so in that mode
//! events go to a plain-text log file; one-shot CLI commands log to stderr.
//! `SPLITSY_LOG` (an `EnvFilter` directive) overrides the configured level.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{SplitsyError, SplitsyResult};

/// Environment variable holding a log filter directive
pub const LOG_ENV: &str = "SPLITSY_LOG";

/// Where log events are written
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// Standard error, with ANSI colors
    Stderr,
    /// Append to a file, without ANSI colors
    File(PathBuf),
}

/// Build the filter from `SPLITSY_LOG`, falling back to `default_level`
pub fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber
pub fn init(default_level: &str, target: LogTarget) -> SplitsyResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(default_level))
        .with_target(false);

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SplitsyError::Io(format!("Failed to create log directory: {}", e))
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| SplitsyError::Io(format!("Failed to open log file: {}", e)))?;
            builder
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };

    result.map_err(|e| SplitsyError::Config(format!("Failed to initialize logging: {}", e)))
}
