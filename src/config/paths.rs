//! Path management for Splitsy
//!
//! Provides XDG-compliant path resolution for the settings and log files.
//!
//! ## Path Resolution Order
//!
//! 1. `SPLITSY_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/splitsy` or `~/.config/splitsy`
//! 3. Windows: `%APPDATA%\splitsy`

use std::path::PathBuf;

use crate::error::SplitsyError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "SPLITSY_CONFIG_DIR";

/// Manages all paths used by Splitsy
#[derive(Debug, Clone)]
pub struct SplitsyPaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl SplitsyPaths {
    /// Create a new SplitsyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application-data directory can be
    /// determined.
    pub fn new() -> Result<Self, SplitsyError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SplitsyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/splitsy/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the diagnostic log written in TUI mode
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("splitsy.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SplitsyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SplitsyError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default config directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SplitsyError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join("splitsy"));
        }
    }
    let home = std::env::var("HOME")
        .map_err(|_| SplitsyError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("splitsy"))
}

/// Resolve the default config directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SplitsyError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SplitsyError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("splitsy"))
}
