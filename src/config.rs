use crate::core::id_policy::IdPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "steply-workflow.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub id_policy: IdPolicy,
    pub clipboard: ClipboardBackend,
    /// ANSI colors in the editor view.
    pub color: bool,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_policy: IdPolicy::default(),
            clipboard: ClipboardBackend::default(),
            color: true,
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardBackend {
    /// Terminal escape sequence understood by most modern terminals.
    #[default]
    Osc52,
    /// Copies are kept in memory only.
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl Config {
    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to a mapping.
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source)
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Explicit path if given, else the default file when it exists, else
    /// defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            return Self::load_file(fallback);
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{ClipboardBackend, Config};
    use crate::core::id_policy::IdPolicy;

    #[test]
    fn empty_document_gives_defaults() {
        let config = Config::from_yaml("").expect("config");
        assert_eq!(config, Config::default());
        assert_eq!(config.id_policy, IdPolicy::NextPosition);
        assert_eq!(config.clipboard, ClipboardBackend::Osc52);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = Config::from_yaml("id_policy: monotonic\nlogging:\n  level: debug\n")
            .expect("config");
        assert_eq!(config.id_policy, IdPolicy::Monotonic);
        assert_eq!(config.logging.level, "debug");
        assert!(config.color);
    }

    #[test]
    fn clipboard_can_be_disabled() {
        let config = Config::from_yaml("clipboard: none").expect("config");
        assert_eq!(config.clipboard, ClipboardBackend::None);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(Config::from_yaml("id_policy: random").is_err());
    }
}
