use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Prefix shared by every environment variable the service reads
pub const ENV_PREFIX: &str = "STOREFRONT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading error: {message}")]
    LoadError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
    #[serde(default = "default_max_request_size")]
    pub max_request_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_service_version")]
    pub service_version: String,
    /// Traces are exported over OTLP only when this is set
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub enable_json_logging: bool,
}

impl Config {
    /// Load configuration from `STOREFRONT_*` environment variables and validate it
    pub fn from_environment() -> Result<Self, ConfigError> {
        Self::from_source(config::Environment::with_prefix(ENV_PREFIX))
    }

    pub(crate) fn from_source(source: config::Environment) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(source)
            .build()
            .map_err(|e| ConfigError::LoadError {
                message: format!("Failed to load configuration: {}", e),
            })?;

        let config = Config {
            server: deserialize_section(&settings, "server")?,
            observability: deserialize_section(&settings, "observability")?,
        };

        config.validate()?;

        debug!("Configuration: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError {
                message: "Server port cannot be 0".to_string(),
            });
        }

        if self.server.request_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Request timeout cannot be 0".to_string(),
            });
        }

        if self.server.max_request_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "Max request size cannot be 0".to_string(),
            });
        }

        if self.observability.service_name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Service name cannot be empty".to_string(),
            });
        }

        if let Some(endpoint) = &self.observability.otlp_endpoint {
            if endpoint.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "OTLP endpoint cannot be blank when set".to_string(),
                });
            }
        }

        Ok(())
    }
}

// Every section reads from the same flat key space.
fn deserialize_section<T: DeserializeOwned>(
    settings: &config::Config,
    section: &str,
) -> Result<T, ConfigError> {
    settings
        .clone()
        .try_deserialize()
        .map_err(|e| ConfigError::LoadError {
            message: format!("Failed to deserialize {} config: {}", section, e),
        })
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_timeout(),
            max_request_size: default_max_request_size(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            service_version: default_service_version(),
            otlp_endpoint: None,
            log_level: default_log_level(),
            enable_json_logging: false,
        }
    }
}

// Default value functions
pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_port() -> u16 {
    3001
}

pub(crate) fn default_timeout() -> u64 {
    30
}

pub(crate) fn default_max_request_size() -> usize {
    1024 * 1024 // 1MB
}

pub(crate) fn default_service_name() -> String {
    "storefront-rs".to_string()
}

pub(crate) fn default_service_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}
