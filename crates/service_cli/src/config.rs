//! Runtime configuration
//!
//! Settings come from a TOML file, environment variables and command-line
//! flags. Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (read by clap alongside the flags)
//! 3. Config file
//! 4. Default values

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Largest number of decimal places worth printing for an `f64`.
pub const MAX_PRECISION: usize = 17;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid precision: {0}. Must be at most 17")]
    InvalidPrecision(usize),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted on the command line and in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LogLevel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Estimator configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PimcConfig {
    /// Log level for stderr diagnostics
    pub log_level: LogLevel,
    /// Fixed generator seed; `None` seeds from the system clock
    pub seed: Option<u64>,
    /// Decimal places printed for the estimate and the elapsed time
    pub precision: usize,
}

impl Default for PimcConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            seed: None,
            // Matches C's `%f`.
            precision: 6,
        }
    }
}

impl PimcConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: PimcConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision(self.precision));
        }
        Ok(())
    }

    /// Merge with command-line overrides (overrides take precedence)
    pub fn merge(&mut self, overrides: &ConfigOverrides) -> Result<(), ConfigError> {
        if let Some(log_level) = &overrides.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(precision) = overrides.precision {
            self.precision = precision;
        }
        Ok(())
    }
}

/// Values supplied by flags or their environment variables
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Seed override
    pub seed: Option<u64>,
    /// Precision override
    pub precision: Option<usize>,
}

/// Build configuration from all sources
pub fn build_config(overrides: &ConfigOverrides) -> Result<PimcConfig, ConfigError> {
    let mut config = match &overrides.config_file {
        Some(path) => PimcConfig::from_file(path)?,
        None => PimcConfig::default(),
    };

    config.merge(overrides)?;
    config.validate()?;

    Ok(config)
}
