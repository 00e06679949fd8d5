//! Shared Error Types
//!
//! This module defines the validation errors produced while turning raw
//! request payloads into documents. They are shared between the request
//! types in `backend` and the document constructors in `shared::content`.
//!
//! # Error Categories
//!
//! - `MissingField` - A required field was absent, empty or whitespace only
//! - `ValidationError` - A field was present but its value is unusable
//!
//! # Usage
//!
//! ```rust
//! use devhub::shared::error::{require, SharedError};
//!
//! let err = require("code", None).unwrap_err();
//! assert_eq!(err, SharedError::missing("code"));
//! ```
use thiserror::Error;

/// Validation errors raised before anything is written
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A required field was not supplied
    #[error("Missing required field '{field}'")]
    MissingField {
        /// Name of the field as it appears in the request body
        field: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new missing field error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field } | Self::ValidationError { field, .. } => field,
        }
    }
}

/// Take a required text field.
///
/// Absent, empty and whitespace-only values all count as missing. The value
/// is returned untouched otherwise, so code snippets keep their indentation.
pub fn require(field: &str, value: Option<String>) -> Result<String, SharedError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(SharedError::missing(field)),
    }
}

/// Normalise an optional text field, dropping blank values.
pub fn optional(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
