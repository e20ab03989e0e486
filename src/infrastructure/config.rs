//! Server configuration loaded from TOML.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use super::logging::LoggingConfig;
use crate::domain::{DegeneratePolicy, SolverConfig};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "MASSBAL_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerSection,
    pub solver: SolverSection,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub address: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            address: "0.0.0.0:50051".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverSection {
    pub degenerate_policy: String,
    pub tolerance: f64,
}

impl Default for SolverSection {
    fn default() -> Self {
        let defaults = SolverConfig::default();
        Self {
            degenerate_policy: defaults.degenerate_policy.to_string(),
            tolerance: defaults.tolerance,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    /// Load from `$MASSBAL_CONFIG`, else `config.toml`. A missing default file yields defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.address()?;
        self.solver_config()?;
        self.logging.validate()?;
        Ok(())
    }

    pub fn address(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .address
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                field: "server.address",
                reason: e.to_string(),
            })
    }

    /// Solver defaults applied to requests that leave them unspecified
    pub fn solver_config(&self) -> Result<SolverConfig, ConfigError> {
        let degenerate_policy: DegeneratePolicy = self
            .solver
            .degenerate_policy
            .parse()
            .map_err(|reason| ConfigError::InvalidValue {
                field: "solver.degenerate_policy",
                reason,
            })?;

        let tolerance = self.solver.tolerance;
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "solver.tolerance",
                reason: format!("must be a positive number (got {})", tolerance),
            });
        }

        Ok(SolverConfig {
            degenerate_policy,
            tolerance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.address().unwrap().port(), 50051);
        assert_eq!(config.solver_config().unwrap(), SolverConfig::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_sections_fill_remaining_fields() {
        let config = Config::from_toml_str(
            r#"
[solver]
degenerate_policy = "reject"

[logging]
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(
            config.solver_config().unwrap().degenerate_policy,
            DegeneratePolicy::Reject
        );
        assert_eq!(config.solver.tolerance, 1e-9);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = Config::from_toml_str("[solver]\ndegenerate_policy = \"ignore\"\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "solver.degenerate_policy",
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        let err = Config::from_toml_str("[solver]\ntolerance = 0.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "solver.tolerance",
                ..
            }
        ));
    }

    #[test]
    fn rejects_bad_address() {
        let err = Config::from_toml_str("[server]\naddress = \"localhost\"\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "server.address",
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = Config::from_toml_str("[logging]\nformat = \"yaml\"\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for logging.format: unknown log format 'yaml' (expected 'pretty' or 'json')"
        );
    }

    #[test]
    fn reports_parse_errors() {
        let err = Config::from_toml_str("[solver\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
