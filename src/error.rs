//! Error types for the UI configuration store.
//!
//! Typed dispatch never fails. These errors only surface on the untyped
//! boundary (dispatch by name with a JSON payload) and while loading settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiConfigError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Invalid payload for {action}: {message}")]
    InvalidPayload { action: String, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),
}

impl From<config::ConfigError> for UiConfigError {
    fn from(err: config::ConfigError) -> Self {
        UiConfigError::ConfigError(err.to_string())
    }
}

impl From<toml::ser::Error> for UiConfigError {
    fn from(err: toml::ser::Error) -> Self {
        UiConfigError::ConfigError(err.to_string())
    }
}

impl From<toml::de::Error> for UiConfigError {
    fn from(err: toml::de::Error) -> Self {
        UiConfigError::ConfigError(err.to_string())
    }
}
