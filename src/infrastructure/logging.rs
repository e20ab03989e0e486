//! Logging configuration and initialization.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tracing_subscriber::{fmt as subscriber_fmt, EnvFilter};

use super::config::ConfigError;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!(
                "unknown log format '{}' (expected 'pretty' or 'json')",
                other
            )),
        }
    }
}

/// Logging configuration.
///
/// `level` takes `EnvFilter` directives, so both `debug` and
/// `massbal=debug,tonic=warn` are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    pub fn log_format(&self) -> Result<LogFormat, ConfigError> {
        self.format
            .parse()
            .map_err(|reason| ConfigError::InvalidValue {
                field: "logging.format",
                reason,
            })
    }

    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.level).map_err(|e| ConfigError::InvalidValue {
            field: "logging.level",
            reason: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log_format()?;
        self.env_filter()?;
        Ok(())
    }

    /// Initialize the tracing subscriber. `RUST_LOG` takes precedence over `level`.
    pub fn init(&self) -> Result<(), ConfigError> {
        let format = self.log_format()?;
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => self.env_filter()?,
        };

        match format {
            LogFormat::Json => subscriber_fmt().json().with_env_filter(filter).init(),
            LogFormat::Pretty => subscriber_fmt().with_env_filter(filter).init(),
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty.to_string(),
        }
    }
}
