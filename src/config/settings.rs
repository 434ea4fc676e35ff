//! User settings for Splitsy
//!
//! Manages user preferences: currency symbol, how many parties a session
//! starts with, how share edits rebalance, slider step and logging level.
//! Only preferences live here; expenses are never written to disk.

use serde::{Deserialize, Serialize};

use super::paths::SplitsyPaths;
use crate::error::SplitsyError;
use crate::models::{MAX_PARTIES, MIN_PARTIES};
use crate::services::membership::RebalanceMode;

/// User settings for Splitsy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Number of parties a new session starts with
    #[serde(default = "default_parties")]
    pub default_parties: usize,

    /// How the other shares react when one share is edited
    #[serde(default)]
    pub rebalance_mode: RebalanceMode,

    /// Percentage points moved per slider step
    #[serde(default = "default_percentage_step")]
    pub percentage_step: f64,

    /// TUI tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Log filter used when `SPLITSY_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_parties() -> usize {
    MIN_PARTIES
}

fn default_percentage_step() -> f64 {
    0.1
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_parties: default_parties(),
            rebalance_mode: RebalanceMode::default(),
            percentage_step: default_percentage_step(),
            tick_rate_ms: default_tick_rate_ms(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &SplitsyPaths) -> Result<Self, SplitsyError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SplitsyError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| SplitsyError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SplitsyPaths) -> Result<(), SplitsyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SplitsyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SplitsyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), SplitsyError> {
        if !(MIN_PARTIES..=MAX_PARTIES).contains(&self.default_parties) {
            return Err(SplitsyError::Config(format!(
                "default_parties must be between {} and {}, got {}",
                MIN_PARTIES, MAX_PARTIES, self.default_parties
            )));
        }
        if !(self.percentage_step > 0.0 && self.percentage_step <= 100.0) {
            return Err(SplitsyError::Config(format!(
                "percentage_step must be in (0, 100], got {}",
                self.percentage_step
            )));
        }
        if self.tick_rate_ms == 0 {
            return Err(SplitsyError::Config("tick_rate_ms must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.default_parties, 2);
        assert_eq!(settings.rebalance_mode, RebalanceMode::Pinned);
        assert_eq!(settings.percentage_step, 0.1);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitsyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            default_parties: 3,
            rebalance_mode: RebalanceMode::Proportional,
            currency_symbol: "€".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_parties, 3);
        assert_eq!(loaded.rebalance_mode, RebalanceMode::Proportional);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitsyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_parties, 2);
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitsyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"rebalance_mode": "proportional"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.rebalance_mode, RebalanceMode::Proportional);
        assert_eq!(loaded.tick_rate_ms, 250);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitsyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"default_parties": 30}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, SplitsyError::Config(_)));

        let settings = Settings {
            percentage_step: 0.0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
