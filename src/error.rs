//! Custom error types for Splitsy
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Splitsy operations
#[derive(Error, Debug)]
pub enum SplitsyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input and data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The allocation already holds the maximum number of parties
    #[error("Capacity error: an allocation holds at most {max} parties")]
    Capacity { max: usize },

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl SplitsyError {
    /// Create a "not found" error for parties
    pub fn party_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Party",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a capacity error
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::Capacity { .. })
    }
}

impl From<std::io::Error> for SplitsyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SplitsyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Splitsy operations
pub type SplitsyResult<T> = Result<T, SplitsyError>;
