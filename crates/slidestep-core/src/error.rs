//! Core error types for slidestep-core.
//!
//! Configuration mistakes are the only failures the engine knows about.
//! Everything after construction is a total function over its inputs.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for slidestep-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// `cycle` needs a bounded sequence to wrap around.
    #[error("cycle requires a total step count greater than zero")]
    CycleWithoutTotal,

    /// `auto_play` needs a tick interval.
    #[error("auto_play requires a duration greater than zero")]
    AutoPlayWithoutDuration,

    /// Navigation has to move forward by at least one step.
    #[error("step_interval must be at least 1, got {0}")]
    InvalidStepInterval(i64),

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
