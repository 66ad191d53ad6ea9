//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tracing initialization failed: {0}")]
    TracingInit(String),

    #[error("Shared JSON codec is already initialized")]
    CodecAlreadyInstalled,
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Codec indent exceeds maximum allowed ({max})")]
    IndentTooLarge { max: usize },

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
