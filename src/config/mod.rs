//! Configuration management

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub github: GithubConfig,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
}

/// GitHub API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Base URL of the GitHub REST API
    pub api_url: String,
    /// Base URL for raw file content (README references)
    pub raw_content_url: String,
    /// Optional bearer token for authenticated requests
    pub token: Option<String>,
    /// Timeout for individual requests (in seconds)
    pub request_timeout_seconds: u64,
    /// User agent sent with outbound requests
    pub user_agent: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            raw_content_url: "https://raw.githubusercontent.com".to_string(),
            token: None,
            request_timeout_seconds: 30,
            user_agent: format!("repolens/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl GithubConfig {
    /// Per-fetch deadline as a [`Duration`]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

/// Search filter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet interval before a query is published (in milliseconds)
    pub debounce_ms: u64,
    /// Maximum accepted query length; longer input is rejected by the form
    /// layer before it reaches the filter
    pub max_query_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            max_query_length: 30,
        }
    }
}

impl SearchConfig {
    /// Debounce interval as a [`Duration`]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log filter when RUST_LOG is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigLoadError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        // Add environment-specific config if ENV is set
        if let Ok(env) = std::env::var("ENV") {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{}", env)).required(false));
        }

        // Add local config and environment variables last (highest priority)
        builder = builder
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("REPOLENS").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Validate the loaded configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.github.api_url.is_empty() {
            return Err(ConfigLoadError::Invalid(
                "github.api_url must not be empty".to_string(),
            ));
        }
        if self.github.request_timeout_seconds == 0 {
            return Err(ConfigLoadError::Invalid(
                "github.request_timeout_seconds must be > 0".to_string(),
            ));
        }
        if self.search.max_query_length == 0 {
            return Err(ConfigLoadError::Invalid(
                "search.max_query_length must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Configuration file error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration validation error: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.search.max_query_length, 30);
        assert_eq!(config.github.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = Config::default();
        config.github.request_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }
}
