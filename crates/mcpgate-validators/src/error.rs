//! Validation error types for gateway input checks

use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reasons a candidate string was rejected
///
/// Every variant carries the caller-supplied field label so the rendered
/// message reads naturally, e.g. `"Name cannot be empty"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: String },

    /// `allowed` is the pattern's clause, e.g. `"can only contain letters, ..."`
    #[error("{field} {allowed}")]
    InvalidCharacters {
        field: String,
        allowed: &'static str,
    },

    #[error("{field} exceeds maximum length of {max} characters (got {actual})")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("{field} cannot contain HTML special characters")]
    HtmlCharacters { field: String },
}

impl ValidationError {
    /// Field label the rejected value was submitted under
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Empty { field }
            | ValidationError::InvalidCharacters { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::HtmlCharacters { field } => field,
        }
    }

    /// Check if this rejection looks like an injection attempt worth alerting on
    pub fn is_critical(&self) -> bool {
        matches!(self, ValidationError::HtmlCharacters { .. })
    }

    /// Get error category for metrics and logging
    pub fn category(&self) -> &'static str {
        match self {
            ValidationError::Empty { .. } => "empty",
            ValidationError::InvalidCharacters { .. } => "invalid_characters",
            ValidationError::TooLong { .. } => "too_long",
            ValidationError::HtmlCharacters { .. } => "html_characters",
        }
    }
}
