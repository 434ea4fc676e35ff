//! Configuration module for Splitsy
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SplitsyPaths;
pub use settings::Settings;
