//! services/viewer/src/config.rs
//!
//! Defines the viewer's configuration structure and loading logic.
//!
//! Configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use crate::render::OutputFormat;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub log_level: Level,
    pub format: OutputFormat,
    /// Tag prefix for group A members, e.g. `I` for interviewers.
    pub group_a_label: String,
    /// Tag prefix for group B members, e.g. `O` for interrogated persons.
    pub group_b_label: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let format = match lookup("VIEWER_FORMAT") {
            Some(raw) => raw
                .parse::<OutputFormat>()
                .map_err(|e| ConfigError::InvalidValue("VIEWER_FORMAT".to_string(), e))?,
            None => OutputFormat::Text,
        };

        let group_a_label = label(&lookup, "VIEWER_GROUP_A_LABEL", "I")?;
        let group_b_label = label(&lookup, "VIEWER_GROUP_B_LABEL", "O")?;

        Ok(Self {
            log_level,
            format,
            group_a_label,
            group_b_label,
        })
    }
}

fn label(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<String, ConfigError> {
    match lookup(key) {
        None => Ok(default.to_string()),
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidValue(
            key.to_string(),
            "label must not be empty".to_string(),
        )),
        Some(value) => Ok(value.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.group_a_label, "I");
        assert_eq!(config.group_b_label, "O");
    }

    #[test]
    fn overrides() {
        let config = load(&[
            ("RUST_LOG", "debug"),
            ("VIEWER_FORMAT", "html"),
            ("VIEWER_GROUP_A_LABEL", "P"),
        ])
        .unwrap();
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.format, OutputFormat::Html);
        assert_eq!(config.group_a_label, "P");
    }

    #[test]
    fn invalid_values() {
        assert!(matches!(
            load(&[("RUST_LOG", "loud")]),
            Err(ConfigError::InvalidValue(key, _)) if key == "RUST_LOG"
        ));
        assert!(matches!(
            load(&[("VIEWER_FORMAT", "pdf")]),
            Err(ConfigError::InvalidValue(key, _)) if key == "VIEWER_FORMAT"
        ));
        assert!(matches!(
            load(&[("VIEWER_GROUP_B_LABEL", "  ")]),
            Err(ConfigError::InvalidValue(key, _)) if key == "VIEWER_GROUP_B_LABEL"
        ));
    }
}
