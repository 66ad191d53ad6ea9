//! Document configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SEARCH_DOCUMENT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use search_document::config::{init_tracing, DocumentConfig};
//! use search_document::install_shared_codec;
//!
//! let config = DocumentConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! init_tracing(&config.logging).expect("Failed to initialize tracing");
//! install_shared_codec(&config.codec).expect("Codec already in use");
//! ```

mod codec;
mod error;
mod logging;

pub use codec::{CodecConfig, MAX_INDENT};
pub use error::{ConfigError, ValidationError};
pub use logging::{init_tracing, LoggingConfig};

use serde::Deserialize;

/// Root configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`DocumentConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentConfig {
    /// JSON codec layout
    #[serde(default)]
    pub codec: CodecConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DocumentConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SEARCH_DOCUMENT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SEARCH_DOCUMENT__CODEC__PRETTY=true` -> `codec.pretty = true`
    /// - `SEARCH_DOCUMENT__LOGGING__FILTER=warn` -> `logging.filter = "warn"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SEARCH_DOCUMENT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.codec.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("SEARCH_DOCUMENT__CODEC__PRETTY");
        env::remove_var("SEARCH_DOCUMENT__CODEC__INDENT");
        env::remove_var("SEARCH_DOCUMENT__LOGGING__FILTER");
        env::remove_var("SEARCH_DOCUMENT__LOGGING__JSON");
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = DocumentConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.codec, CodecConfig::default());
        assert_eq!(config.logging.filter, "info,search_document=debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_codec_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SEARCH_DOCUMENT__CODEC__PRETTY", "true");
        env::set_var("SEARCH_DOCUMENT__CODEC__INDENT", "4");
        let result = DocumentConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.codec, CodecConfig::pretty(4));
    }

    #[test]
    fn test_load_logging_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SEARCH_DOCUMENT__LOGGING__FILTER", "warn");
        env::set_var("SEARCH_DOCUMENT__LOGGING__JSON", "true");
        let result = DocumentConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.filter, "warn");
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_rejects_wide_indent() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SEARCH_DOCUMENT__CODEC__INDENT", "16");
        let result = DocumentConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::IndentTooLarge { .. })
        ));
    }
}
