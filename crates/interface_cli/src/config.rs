//! CLI configuration

use core_kernel::CoreError;
use serde::Deserialize;

/// Configuration for the quote binary
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Log level
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from environment variables with the QUOTE_ prefix
    pub fn from_env() -> Result<Self, CoreError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("QUOTE"))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| CoreError::configuration(e.to_string()))
    }

    /// Loads from environment, falling back to individual variables or defaults
    pub fn load() -> Self {
        Self::from_env().unwrap_or_else(|_| Self {
            log_level: std::env::var("QUOTE_LOG_LEVEL")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),
        })
    }
}
