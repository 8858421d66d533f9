//! Validation harness configuration
//!
//! Handles loading configuration from defaults, TOML files and environment
//! variables, and installs the `tracing` subscriber.

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::comparison::Tolerance;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "VALIDOR_LOG_LEVEL";
/// Environment variable overriding the relative tolerance.
pub const ENV_MAX_RELATIVE: &str = "VALIDOR_MAX_RELATIVE";
/// Environment variable overriding the absolute tolerance.
pub const ENV_EPSILON: &str = "VALIDOR_EPSILON";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Tolerance that is negative, NaN or infinite.
    #[error("Invalid tolerance {name} = {value}. Must be finite and non-negative")]
    InvalidTolerance {
        /// Field name
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Configuration file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Environment variable could not be parsed.
    #[error("Environment variable error: {0}")]
    EnvError(String),

    /// A global subscriber is already installed.
    #[error("Failed to initialise tracing: {0}")]
    TracingInit(String),
}

/// Log levels for validation output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Per-case trace
    Trace,
    /// Includes `PASSED` lines
    Debug,
    /// `RUNNING` lines and the summary
    #[default]
    Info,
    /// Failures only
    Warn,
    /// Nothing from the harness
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

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LogLevel::from_str(&s).map_err(serde::de::Error::custom)
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

/// Harness configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ValidorConfig {
    /// Log level for the `dual_validor` target
    pub log_level: LogLevel,
    /// Approximate comparison tolerances, flattened into the top-level table
    #[serde(flatten)]
    pub tolerance: Tolerance,
}

impl Default for ValidorConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            tolerance: Tolerance::default(),
        }
    }
}

impl ValidorConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Tolerances for `comparison::relative`.
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ValidorConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from variables returned by `lookup`.
    ///
    /// Unset variables leave the current value untouched.
    pub fn apply_env<L>(&mut self, lookup: L) -> Result<(), ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(value) = lookup(ENV_MAX_RELATIVE) {
            self.tolerance.max_relative = parse_float(ENV_MAX_RELATIVE, &value)?;
        }
        if let Some(value) = lookup(ENV_EPSILON) {
            self.tolerance.epsilon = parse_float(ENV_EPSILON, &value)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("max_relative", self.tolerance.max_relative),
            ("epsilon", self.tolerance.epsilon),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTolerance { name, value });
            }
        }
        Ok(())
    }
}

fn parse_float(key: &str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{key}={value} is not a number")))
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. Environment variables
/// 2. Config file
/// 3. Default values
pub fn build_config(path: Option<&Path>) -> Result<ValidorConfig, ConfigError> {
    build_config_with(path, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with<L>(path: Option<&Path>, lookup: L) -> Result<ValidorConfig, ConfigError>
where
    L: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => ValidorConfig::from_file(path)?,
        None => ValidorConfig::default(),
    };
    config.apply_env(lookup)?;
    config.validate()?;
    Ok(config)
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `level` applies to every target.
pub fn init_tracing(level: LogLevel) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init()
        .map_err(|e| ConfigError::TracingInit(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ValidorConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.tolerance.max_relative, 1e-9);
        assert_eq!(config.tolerance.epsilon, 1e-12);
        assert_eq!(config.tolerance(), Tolerance::default());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }

    #[test]
    fn test_toml_partial_keeps_defaults() {
        let config = ValidorConfig::from_toml_str("log_level = \"debug\"\nepsilon = 1e-6\n").unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.tolerance.epsilon, 1e-6);
        assert_eq!(config.tolerance.max_relative, 1e-9);
    }

    #[test]
    fn test_toml_tolerance_keys_are_top_level() {
        let config =
            ValidorConfig::from_toml_str("max_relative = 1e-4\nepsilon = 1e-8\n").unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.tolerance(), Tolerance::new(1e-8, 1e-4));
    }

    #[test]
    fn test_toml_invalid_level() {
        let err = ValidorConfig::from_toml_str("log_level = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
    }

    #[test]
    fn test_validate_rejects_bad_tolerances() {
        let negative = ValidorConfig {
            tolerance: Tolerance::new(-1.0, 1e-9),
            ..Default::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(ConfigError::InvalidTolerance { name: "epsilon", .. })
        ));

        let nan = ValidorConfig {
            tolerance: Tolerance::new(1e-12, f64::NAN),
            ..Default::default()
        };
        assert!(nan.validate().is_err());

        assert!(ValidorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ValidorConfig::default();
        config
            .apply_env(env(&[(ENV_LOG_LEVEL, "warn"), (ENV_MAX_RELATIVE, "1e-4")]))
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.tolerance.max_relative, 1e-4);
        assert_eq!(config.tolerance.epsilon, 1e-12);
    }

    #[test]
    fn test_env_parse_error() {
        let mut config = ValidorConfig::default();
        let err = config.apply_env(env(&[(ENV_EPSILON, "tiny")])).unwrap_err();
        assert!(matches!(err, ConfigError::EnvError(_)));
    }

    #[test]
    fn test_build_config_env_beats_file() {
        let path = std::env::temp_dir().join(format!("dual_validor_{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "log_level = \"debug\"\nmax_relative = 1e-3").unwrap();
        drop(file);

        let config = build_config_with(Some(&path), env(&[(ENV_LOG_LEVEL, "error")])).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.tolerance.max_relative, 1e-3);
    }

    #[test]
    fn test_build_config_missing_file() {
        let err = build_config_with(Some(Path::new("/nonexistent/validor.toml")), env(&[]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
    }

    #[test]
    fn test_build_config_rejects_env_tolerance() {
        let err = build_config_with(None, env(&[(ENV_EPSILON, "-0.5")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTolerance { .. }));
    }
}
