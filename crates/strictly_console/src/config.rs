//! Console configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    /// List the playable cells before each prompt.
    #[serde(default = "default_show_playable")]
    show_playable: bool,

    /// Stop offering rematches after this many matches.
    #[serde(default)]
    max_matches: Option<u32>,
}

fn default_show_playable() -> bool {
    true
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            show_playable: default_show_playable(),
            max_matches: None,
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.max_matches == Some(0) {
            return Err(ConfigError::new("max_matches must be at least 1".to_string()));
        }

        Ok(config)
    }

    /// Returns a copy with the playable-cell hints switched off.
    pub fn without_hints(self) -> Self {
        Self {
            show_playable: false,
            ..self
        }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ConsoleConfig::from_toml("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert!(*config.show_playable());
        assert_eq!(*config.max_matches(), None);
    }

    #[test]
    fn test_parse_values() {
        let config = ConsoleConfig::from_toml("show_playable = false\nmax_matches = 3\n").unwrap();
        assert!(!*config.show_playable());
        assert_eq!(*config.max_matches(), Some(3));
    }

    #[test]
    fn test_zero_max_matches_rejected() {
        let err = ConsoleConfig::from_toml("max_matches = 0").unwrap_err();
        assert!(err.to_string().contains("max_matches must be at least 1"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ConsoleConfig::from_toml("board_size = 9").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_without_hints() {
        let config = ConsoleConfig::default().without_hints();
        assert!(!*config.show_playable());
    }
}
