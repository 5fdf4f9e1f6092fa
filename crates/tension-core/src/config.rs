//! Configuration for the tension analysis worker.
//!
//! A single data root plus the dependency-parse service endpoint. There are
//! deliberately no other tunables: every lexicon path is derived from the
//! root, and a changed file requires a process restart.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{TensionError, TensionResult};

/// Dependency-parse service endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DepparseConfig {
    /// Hostname of the annotation service
    #[serde(default = "default_depparse_host")]
    pub host: String,

    /// TCP port of the annotation service
    #[serde(default = "default_depparse_port")]
    pub port: u16,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_depparse_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_depparse_host() -> String {
    "localhost".to_string()
}

fn default_depparse_port() -> u16 {
    9999
}

fn default_depparse_timeout_ms() -> u64 {
    30_000
}

impl Default for DepparseConfig {
    fn default() -> Self {
        Self {
            host: default_depparse_host(),
            port: default_depparse_port(),
            timeout_ms: default_depparse_timeout_ms(),
        }
    }
}

impl DepparseConfig {
    /// Base URL of the annotation endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Tracing filter directive (e.g. "info", "tension_worker=debug")
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Root directory holding `models/`, `resources/`, and `lexicons/`
    #[serde(default = "default_data_root")]
    pub data_root: PathBuf,

    #[serde(default)]
    pub depparse: DepparseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_data_root() -> PathBuf {
    PathBuf::from("data")
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{TENSION_ENV}.toml (environment-specific)
    /// 3. Environment variables with TENSION prefix
    pub fn load() -> TensionResult<Self> {
        let env = std::env::var("TENSION_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("TENSION").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values, failing fast on nonsense.
    pub fn validate(&self) -> TensionResult<()> {
        if self.data_root.as_os_str().is_empty() {
            return Err(TensionError::Config(
                "data_root must not be empty".to_string(),
            ));
        }

        if self.depparse.host.is_empty() {
            return Err(TensionError::Config(
                "depparse.host must not be empty".to_string(),
            ));
        }

        if self.depparse.port == 0 {
            return Err(TensionError::Config(
                "depparse.port must be greater than 0".to_string(),
            ));
        }

        if self.depparse.timeout_ms == 0 {
            return Err(TensionError::Config(
                "depparse.timeout_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            depparse: DepparseConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
