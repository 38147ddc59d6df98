//! Core error types for studyflow-core.
//!
//! Errors are grouped by concern using thiserror; [`CoreError`] aggregates
//! them so callers can use a single `?` chain.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studyflow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Timer construction or reset errors
    #[error("Timer error: {0}")]
    Timer(#[from] TimerError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Timer-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// The configured duration must be at least one second.
    #[error("invalid timer duration: {total_secs}s (must be greater than zero)")]
    InvalidDuration { total_secs: u64 },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Referenced item does not exist
    #[error("Unknown {kind}: {id}")]
    NotFound { kind: String, id: String },
}

impl ValidationError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn not_found(kind: &str, id: impl Into<String>) -> Self {
        ValidationError::NotFound {
            kind: kind.to_string(),
            id: id.into(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reset_to(total_secs: u64) -> Result<u64, CoreError> {
        if total_secs == 0 {
            return Err(TimerError::InvalidDuration { total_secs }.into());
        }
        Ok(total_secs)
    }

    #[test]
    fn timer_error_converts_into_core_error() {
        let err = reset_to(0).unwrap_err();
        assert!(matches!(err, CoreError::Timer(TimerError::InvalidDuration { total_secs: 0 })));
        assert_eq!(
            err.to_string(),
            "Timer error: invalid timer duration: 0s (must be greater than zero)"
        );
    }

    #[test]
    fn validation_messages_name_the_field() {
        let err = CoreError::from(ValidationError::not_found("subject", "astrology"));
        assert_eq!(err.to_string(), "Validation error: Unknown subject: astrology");
    }
}
