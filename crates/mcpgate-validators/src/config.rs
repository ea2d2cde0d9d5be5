//! Validator configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::pattern::FieldKind;

/// Default maximum length for names, identifiers and tool names
pub const DEFAULT_MAX_LENGTH: usize = 255;

/// Environment prefix used by [`ValidatorConfig::from_file`]
pub const DEFAULT_ENV_PREFIX: &str = "MCPGATE";

/// Validator configuration
///
/// Only length limits are configurable. The character patterns are fixed so
/// that rejection messages always describe what is actually accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Maximum characters in a display name
    pub max_name_length: usize,
    /// Maximum characters in an identifier
    pub max_identifier_length: usize,
    /// Maximum characters in a tool name
    pub max_tool_name_length: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_LENGTH,
            max_identifier_length: DEFAULT_MAX_LENGTH,
            max_tool_name_length: DEFAULT_MAX_LENGTH,
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Unsupported file format
    #[error("Unsupported configuration file format. Use .toml, .yaml, .yml, or .json")]
    UnsupportedFormat,

    /// A limit that would reject every input
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// Configuration parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] config::ConfigError),
}

impl ValidatorConfig {
    /// Load configuration from a file (TOML, YAML, or JSON)
    ///
    /// Environment variables with the `MCPGATE_` prefix override file
    /// settings, e.g. `MCPGATE_MAX_NAME_LENGTH=64`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, has an unsupported
    /// extension, fails to parse, or sets a zero length limit.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        Self::from_file_with_prefix(path, DEFAULT_ENV_PREFIX)
    }

    /// Load configuration from a file with custom environment prefix
    ///
    /// # Errors
    ///
    /// Same conditions as [`ValidatorConfig::from_file`].
    pub fn from_file_with_prefix(
        path: impl AsRef<std::path::Path>,
        env_prefix: &str,
    ) -> Result<Self, ConfigError> {
        use config::{Config, File, FileFormat};

        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let format = match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => FileFormat::Toml,
            Some("yaml") | Some("yml") => FileFormat::Yaml,
            Some("json") => FileFormat::Json,
            _ => return Err(ConfigError::UnsupportedFormat),
        };

        let config = Config::builder()
            .add_source(File::new(
                path.to_str().ok_or(ConfigError::UnsupportedFormat)?,
                format,
            ))
            .add_source(
                config::Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject limits that would make every input fail
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first zero limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in [FieldKind::Name, FieldKind::Identifier, FieldKind::ToolName] {
            if self.max_length(kind) == 0 {
                return Err(ConfigError::Invalid(format!(
                    "max {} length must be greater than zero",
                    kind
                )));
            }
        }
        Ok(())
    }

    /// Length limit for a field kind
    pub fn max_length(&self, kind: FieldKind) -> usize {
        match kind {
            FieldKind::Name => self.max_name_length,
            FieldKind::Identifier => self.max_identifier_length,
            FieldKind::ToolName => self.max_tool_name_length,
        }
    }

    /// Set maximum name length
    pub fn max_name_length(mut self, max: usize) -> Self {
        self.max_name_length = max;
        self
    }

    /// Set maximum identifier length
    pub fn max_identifier_length(mut self, max: usize) -> Self {
        self.max_identifier_length = max;
        self
    }

    /// Set maximum tool name length
    pub fn max_tool_name_length(mut self, max: usize) -> Self {
        self.max_tool_name_length = max;
        self
    }
}
