//! Configuration-specific error types
//!
//! Errors that can occur while loading or persisting the mount configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No configuration has been saved yet
    #[error("No configuration found at {}", .0.display())]
    Missing(PathBuf),

    /// The persisted file exists but cannot be parsed into a MountConfig
    #[error("Invalid configuration in {}: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },

    /// The file exists but could not be read
    #[error("Failed to read configuration: {0}")]
    Load(String),

    /// Failed to persist the configuration
    #[error("Failed to save configuration: {0}")]
    Save(String),

    /// The per-user config path could not be resolved
    #[error("Could not determine config file path")]
    NoPath,
}
