// RUNTIME PREFERENCES (User Experience)

use crate::logging::{codes, Code, LogLevel};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Errors raised while loading runtime preferences from disk
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn error_code(&self) -> Code {
        codes::system::CONFIGURATION_ERROR
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalPreferences {
    /// Remove every space from the line before tokenizing
    pub strip_all_spaces: bool,

    /// Let identifiers continue through digits (`x1` is one identifier)
    pub alphanumeric_identifiers: bool,

    /// Whether to collect token metrics during tokenization
    pub collect_metrics: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            strip_all_spaces: env_flag(env_vars::STRIP_ALL_SPACES, false),
            alphanumeric_identifiers: env_flag(env_vars::ALPHANUMERIC_IDENTIFIERS, false),
            collect_metrics: env_flag(env_vars::COLLECT_METRICS, true),
        }
    }
}

impl LexicalPreferences {
    /// Preferences with every switch at its built-in default, ignoring the environment
    pub fn baseline() -> Self {
        Self {
            strip_all_spaces: false,
            alphanumeric_identifiers: false,
            collect_metrics: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to emit JSON lines instead of forwarding to the `log` facade
    pub use_structured_logging: bool,

    /// User preferred minimum log level
    pub min_log_level: LogLevel,
}

impl LoggingPreferences {
    /// Facade logging at info level, ignoring the environment
    pub fn baseline() -> Self {
        Self {
            use_structured_logging: false,
            min_log_level: LogLevel::Info,
        }
    }
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env_flag(env_vars::LOGGING_USE_STRUCTURED, false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimePreferences {
    pub lexical: LexicalPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimePreferences {
    /// Built-in defaults for every section, ignoring the environment
    pub fn baseline() -> Self {
        Self {
            lexical: LexicalPreferences::baseline(),
            logging: LoggingPreferences::baseline(),
        }
    }

    /// Parse preferences from TOML text; missing tables and keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load preferences from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// Parse log level from string (used for environment variables and CLI flags)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.trim().to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Environment variable names for configuration
pub mod env_vars {
    // Lexical
    pub const STRIP_ALL_SPACES: &str = "ASSIGN_STRIP_ALL_SPACES";
    pub const ALPHANUMERIC_IDENTIFIERS: &str = "ASSIGN_ALPHANUMERIC_IDENTIFIERS";
    pub const COLLECT_METRICS: &str = "ASSIGN_COLLECT_METRICS";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "ASSIGN_STRUCTURED_LOGGING";
    pub const LOGGING_MIN_LEVEL: &str = "ASSIGN_LOG_LEVEL";
}
