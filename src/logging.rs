//! Structured logging setup.
//!
//! Configuration comes from the environment:
//!
//! | Variable | Values | Default |
//! |---|---|---|
//! | `OAPI_PATHS_LOG_LEVEL` | trace/debug/info/warn/error | `info` |
//! | `OAPI_PATHS_LOG_FORMAT` | json/pretty | `pretty` |
//! | `OAPI_PATHS_LOG_INCLUDE_LOCATION` | true/false | `false` |
//!
//! `RUST_LOG`, when set, takes precedence over the level. Output goes to
//! stderr so rendered documents on stdout stay clean.

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use std::env;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub const LOG_LEVEL_VAR: &str = "OAPI_PATHS_LOG_LEVEL";
pub const LOG_FORMAT_VAR: &str = "OAPI_PATHS_LOG_FORMAT";
pub const LOG_INCLUDE_LOCATION_VAR: &str = "OAPI_PATHS_LOG_INCLUDE_LOCATION";

static INITIALIZED: OnceCell<()> = OnceCell::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// trace/debug/info/warn/error
    pub log_level: String,
    pub format: LogFormat,
    /// Include file:line in each event
    pub include_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::Pretty,
            include_location: false,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup(LOG_LEVEL_VAR).unwrap_or(defaults.log_level),
            format: lookup(LOG_FORMAT_VAR)
                .map(|s| LogFormat::parse(&s))
                .unwrap_or(defaults.format),
            include_location: lookup(LOG_INCLUDE_LOCATION_VAR)
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.include_location),
        }
    }

    /// Override the level, e.g. from a `--verbose` flag.
    #[must_use]
    pub fn with_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

/// Install the global subscriber. Later calls return `Ok(())` without
/// touching the one already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    INITIALIZED.get_or_try_init(|| install(config))?;
    Ok(())
}

fn install(config: &LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level().as_str()));

    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LogConfig::from_lookup(lookup(&[]));
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.level(), Level::INFO);
    }

    #[test]
    fn test_overrides() {
        let config = LogConfig::from_lookup(lookup(&[
            (LOG_LEVEL_VAR, "DEBUG"),
            (LOG_FORMAT_VAR, "json"),
            (LOG_INCLUDE_LOCATION_VAR, "true"),
        ]));
        assert_eq!(config.level(), Level::DEBUG);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.include_location);
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let config = LogConfig::from_lookup(lookup(&[
            (LOG_LEVEL_VAR, "loud"),
            (LOG_FORMAT_VAR, "xml"),
            (LOG_INCLUDE_LOCATION_VAR, "maybe"),
        ]));
        assert_eq!(config.level(), Level::INFO);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(!config.include_location);
    }

    #[test]
    fn test_with_level() {
        let config = LogConfig::default().with_level("warn");
        assert_eq!(config.level(), Level::WARN);
    }

    #[test]
    fn test_init_twice_is_noop() {
        let config = LogConfig::default().with_level("error");
        init_logging(&config).unwrap();
        init_logging(&config).unwrap();
    }
}
