//! Application configuration.
//!
//! Resolution order, lowest to highest: built-in defaults, optional TOML
//! file, `TICTACTOE_SCORE_ENDPOINT`, command-line flags.

use std::path::Path;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Environment variable overriding the score endpoint.
pub const ENDPOINT_ENV: &str = "TICTACTOE_SCORE_ENDPOINT";

/// Where and whether to send score events.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ReporterConfig {
    /// URL that receives both start and end events.
    #[serde(default = "default_endpoint")]
    endpoint: String,

    /// Set to false to drop events instead of posting them.
    #[serde(default = "default_enabled")]
    enabled: bool,
}

#[instrument]
fn default_endpoint() -> String {
    "http://localhost:5000/start_game".to_string()
}

#[instrument]
fn default_enabled() -> bool {
    true
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            enabled: default_enabled(),
        }
    }
}

impl ReporterConfig {
    /// Replaces the endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Turns reporting on or off.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Score reporting settings.
    #[serde(default)]
    reporter: ReporterConfig,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(endpoint = %config.reporter.endpoint, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise starts from defaults, then
    /// applies the `TICTACTOE_SCORE_ENDPOINT` override.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, std::env::var(ENDPOINT_ENV).ok())
    }

    /// Same as [`AppConfig::load`], with the environment endpoint passed in.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_with_env(
        path: impl AsRef<Path>,
        env_endpoint: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = if path.as_ref().exists() {
            Self::from_file(path)?
        } else {
            info!("Config file not found, using defaults");
            Self::default()
        };
        if let Some(endpoint) = env_endpoint {
            info!(%endpoint, "Score endpoint overridden from environment");
            config.reporter = config.reporter.with_endpoint(endpoint);
        }
        Ok(config)
    }

    /// Applies command-line flags, which beat both file and environment.
    #[instrument(skip(self))]
    pub fn with_cli_overrides(mut self, endpoint: Option<String>, no_report: bool) -> Self {
        if let Some(endpoint) = endpoint {
            info!(%endpoint, "Score endpoint overridden from command line");
            self.reporter = self.reporter.with_endpoint(endpoint);
        }
        if no_report {
            self.reporter = self.reporter.with_enabled(false);
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
