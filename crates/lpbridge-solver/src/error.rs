//! Configuration error types.

use crate::config::OptionKind;

/// Error type for building a solve configuration from text.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Verbosity name is not one of off, low, medium, high.
    InvalidVerbosity(String),
    /// A control option entry is not of the form `name=value`.
    MalformedControlOption(String),
    /// A control option value does not parse as its declared kind.
    InvalidControlValue {
        name: String,
        value: String,
        kind: OptionKind,
    },
}

impl ConfigError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidVerbosity(_) => "CONFIG_INVALID_VERBOSITY",
            ConfigError::MalformedControlOption(_) => "CONFIG_MALFORMED_OPTION",
            ConfigError::InvalidControlValue { .. } => "CONFIG_INVALID_OPTION_VALUE",
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidVerbosity(value) => write!(
                f,
                "[{}] Unknown verbosity '{}' (expected off, low, medium or high)",
                self.code(),
                value
            ),
            ConfigError::MalformedControlOption(entry) => write!(
                f,
                "[{}] Control option '{}' is not of the form name=value",
                self.code(),
                entry
            ),
            ConfigError::InvalidControlValue { name, value, kind } => write!(
                f,
                "[{}] Control option {} expects a {} value (got '{}')",
                self.code(),
                name,
                kind.as_str(),
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
