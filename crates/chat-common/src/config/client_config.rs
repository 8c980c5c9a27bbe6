//! Client configuration
//!
//! Loads configuration from environment variables, with a `.env` file picked
//! up when present.

use chat_mapper::{DataMapper, MapperConfig};
use serde::Deserialize;
use std::env;
use std::str::FromStr;
use tracing::Level;

use crate::telemetry::TracingConfig;

/// Main client configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub mapper: MapperConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            env: default_env(),
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of the pretty format; follows the environment when unset
    #[serde(default)]
    pub json: Option<bool>,
    /// Log every mapping error through `tracing`
    #[serde(default = "default_log_mapping_errors")]
    pub mapping_errors: bool,
    /// Level override for mapper and dispatcher output
    #[serde(skip)]
    pub mapper_level: Option<Level>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json: None,
            mapping_errors: default_log_mapping_errors(),
            mapper_level: None,
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "chat-client".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_log_mapping_errors() -> bool {
    true
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is set to a value that cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            Some(value) => Environment::parse(&value)
                .ok_or(ConfigError::InvalidValue("APP_ENV", value))?,
            None => default_env(),
        };

        let defaults = MapperConfig::default();

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            mapper: MapperConfig {
                max_depth: parse_var(&lookup, "MAPPER_MAX_DEPTH")?.unwrap_or(defaults.max_depth),
                qualify_error_paths: parse_flag(&lookup, "MAPPER_QUALIFY_ERROR_PATHS")?
                    .unwrap_or(defaults.qualify_error_paths),
            },
            logging: LoggingConfig {
                json: parse_flag(&lookup, "LOG_JSON")?,
                mapping_errors: parse_flag(&lookup, "MAPPER_LOG_ERRORS")?
                    .unwrap_or_else(default_log_mapping_errors),
                mapper_level: parse_var(&lookup, "LOG_MAPPER_LEVEL")?,
            },
        })
    }

    /// Data mapper configured from these settings
    #[must_use]
    pub fn data_mapper(&self) -> DataMapper {
        DataMapper::new(self.mapper.clone()).with_error_logging(self.logging.mapping_errors)
    }

    /// Tracing setup for the configured environment
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        let mut config = if self.app.env.is_production() {
            TracingConfig::production()
        } else if self.app.env.is_development() {
            TracingConfig::development()
        } else {
            TracingConfig::default()
        };

        if let Some(json) = self.logging.json {
            config.json = json;
        }
        if self.logging.mapper_level.is_some() {
            config.mapper_level = self.logging.mapper_level;
        }
        config
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key, value))
        })
        .transpose()
}

fn parse_flag<F>(lookup: &F, key: &'static str) -> Result<Option<bool>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidValue(key, value)),
        })
        .transpose()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
