//! MCP Gateway input validators
//!
//! Character-class validation for names, identifiers and tool names accepted
//! by the gateway. Each check is a pure function of its input: on success the
//! input is handed back unchanged, on failure a [`ValidationError`] names the
//! field and lists exactly which characters are permitted.
//!
//! # Checks
//!
//! Applied in order for every field kind:
//!
//! 1. **Empty**: empty strings are rejected
//! 2. **Pattern**: full match against the field's [`ValidationPattern`]
//! 3. **Length**: at most the configured number of characters
//! 4. **HTML characters**: `<`, `>`, `"`, `'` and `/` are rejected
//!
//! No pattern admits the HTML special characters, so step 2 already catches
//! them; step 4 stays in place behind it.
//!
//! # Example
//!
//! ```rust
//! use mcpgate_validators::{SecurityValidator, ValidatorConfig};
//!
//! let validator = SecurityValidator::new(ValidatorConfig::default().max_name_length(64));
//!
//! assert_eq!(validator.validate_name("my test name", "Name")?, "my test name");
//! assert!(validator.validate_identifier("my test id", "ID").is_err());
//! assert!(validator.validate_tool_name("1tool").is_err());
//! # Ok::<(), mcpgate_validators::ValidationError>(())
//! ```

pub mod config;
pub mod error;
pub mod pattern;

pub use config::{ConfigError, ValidatorConfig};
pub use error::{ValidationError, ValidationResult};
pub use pattern::{
    FieldKind, HTML_SPECIAL_CHARS, IDENTIFIER_PATTERN, NAME_PATTERN, TOOL_NAME_PATTERN,
    ValidationPattern,
};

use once_cell::sync::Lazy;
use tracing::{debug, warn};

static DEFAULT_VALIDATOR: Lazy<SecurityValidator> = Lazy::new(SecurityValidator::default);

/// Validator for gateway-facing names
#[derive(Debug, Clone, Default)]
pub struct SecurityValidator {
    config: ValidatorConfig,
}

impl SecurityValidator {
    /// Create a validator with the given limits
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a display name
    ///
    /// Letters, digits, underscore, dot, hyphen and space are permitted.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming `label` if any check fails.
    pub fn validate_name<'a>(&self, value: &'a str, label: &str) -> ValidationResult<&'a str> {
        self.validate(FieldKind::Name, value, label)
    }

    /// Validate an identifier
    ///
    /// Same as a name except spaces are rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming `label` if any check fails.
    pub fn validate_identifier<'a>(
        &self,
        value: &'a str,
        label: &str,
    ) -> ValidationResult<&'a str> {
        self.validate(FieldKind::Identifier, value, label)
    }

    /// Validate a tool name
    ///
    /// Must start with a letter; the rest may be letters, digits, underscore,
    /// dot or hyphen.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] labelled "Tool name" if any check fails.
    pub fn validate_tool_name<'a>(&self, value: &'a str) -> ValidationResult<&'a str> {
        self.validate(FieldKind::ToolName, value, FieldKind::ToolName.default_label())
    }

    /// Validate `value` as a field of the given kind
    ///
    /// # Errors
    ///
    /// Returns the first failed check as a [`ValidationError`].
    pub fn validate<'a>(
        &self,
        kind: FieldKind,
        value: &'a str,
        label: &str,
    ) -> ValidationResult<&'a str> {
        match self.check(kind, value, label) {
            Ok(()) => {
                debug!(field = label, kind = %kind, "Validation passed");
                Ok(value)
            }
            Err(e) => {
                warn!(
                    field = label,
                    kind = %kind,
                    category = e.category(),
                    critical = e.is_critical(),
                    "Validation rejected: {}",
                    e
                );
                Err(e)
            }
        }
    }

    fn check(&self, kind: FieldKind, value: &str, label: &str) -> ValidationResult<()> {
        if value.is_empty() {
            return Err(ValidationError::Empty {
                field: label.to_string(),
            });
        }

        let pattern = kind.pattern();
        if !pattern.is_match(value) {
            return Err(ValidationError::InvalidCharacters {
                field: label.to_string(),
                allowed: pattern.allowed(),
            });
        }

        let max = self.config.max_length(kind);
        let actual = value.chars().count();
        if actual > max {
            return Err(ValidationError::TooLong {
                field: label.to_string(),
                max,
                actual,
            });
        }

        if crate::pattern::contains_html_special_chars(value) {
            return Err(ValidationError::HtmlCharacters {
                field: label.to_string(),
            });
        }

        Ok(())
    }
}

/// Validate a display name with default limits
///
/// # Errors
///
/// See [`SecurityValidator::validate_name`].
pub fn validate_name<'a>(value: &'a str, label: &str) -> ValidationResult<&'a str> {
    DEFAULT_VALIDATOR.validate_name(value, label)
}

/// Validate an identifier with default limits
///
/// # Errors
///
/// See [`SecurityValidator::validate_identifier`].
pub fn validate_identifier<'a>(value: &'a str, label: &str) -> ValidationResult<&'a str> {
    DEFAULT_VALIDATOR.validate_identifier(value, label)
}

/// Validate a tool name with default limits
///
/// # Errors
///
/// See [`SecurityValidator::validate_tool_name`].
pub fn validate_tool_name(value: &str) -> ValidationResult<&str> {
    DEFAULT_VALIDATOR.validate_tool_name(value)
}
