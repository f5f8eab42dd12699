//! Configuration for the onboarding client

use crate::flow::FlowTimings;
use crate::store::AnswerPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for the onboarding client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How strictly questionnaire answers are checked before moving on
    pub policy: AnswerPolicy,

    /// Simulated sign-in latency in milliseconds
    pub login_delay_ms: u64,

    /// Simulated photo analysis latency in milliseconds
    pub analysis_delay_ms: u64,

    /// UI language override ("en", "zh-CN"); system locale when unset
    pub locale: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: AnswerPolicy::default(),
            login_delay_ms: 1500,
            analysis_delay_ms: 5000,
            locale: None,
        }
    }
}

impl Config {
    pub fn timings(&self) -> FlowTimings {
        FlowTimings {
            login_delay: Duration::from_millis(self.login_delay_ms),
            analysis_delay: Duration::from_millis(self.analysis_delay_ms),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError { source: e })?;

        fs::write(path, content).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// Generate a sample configuration file content
    pub fn sample_config() -> String {
        r#"# Physique Onboarding Configuration File
# This file uses TOML format (https://toml.io)

# Answer policy: "lenient" or "strict"
# - lenient: age, height, weight and the grouped steps can be skipped (default)
# - strict: every question must be answered or confirmed before moving on
policy = "lenient"

# Simulated sign-in latency in milliseconds
login_delay_ms = 1500

# Simulated photo analysis latency in milliseconds
analysis_delay_ms = 5000

# UI language: "en" or "zh-CN" (leave unset to follow the system locale)
# locale = "en"
"#
        .to_string()
    }
}

/// Errors that can occur when loading or saving configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read configuration file
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse configuration file
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to write configuration file
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to serialize configuration
    SerializeError { source: toml::ser::Error },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError { path, source } => {
                write!(f, "Failed to read config file '{}': {}", path.display(), source)
            }
            ConfigError::ParseError { path, source } => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), source)
            }
            ConfigError::WriteError { path, source } => {
                write!(f, "Failed to write config file '{}': {}", path.display(), source)
            }
            ConfigError::SerializeError { source } => {
                write!(f, "Failed to serialize config: {}", source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::WriteError { source, .. } => Some(source),
            ConfigError::SerializeError { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(&Config::sample_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            policy: AnswerPolicy::Strict,
            login_delay_ms: 0,
            analysis_delay_ms: 250,
            locale: Some("zh-CN".to_string()),
        };
        config.save_to_file(&path).unwrap();
        assert_eq!(Config::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "policy = \"strict\"\n").unwrap();
        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.policy, AnswerPolicy::Strict);
        assert_eq!(config.timings().analysis_delay, Duration::from_secs(5));
    }

    #[test]
    fn test_errors_name_the_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let err = Config::load_from_file(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("missing.toml"));

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "policy = \"sometimes\"\n").unwrap();
        assert!(matches!(
            Config::load_from_file(&bad).unwrap_err(),
            ConfigError::ParseError { .. }
        ));
    }
}
