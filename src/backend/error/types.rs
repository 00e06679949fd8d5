/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 * It wraps the errors of each boundary the handlers talk to:
 *
 * - `SharedError` - request validation
 * - `StoreError` - the document store
 * - `UploadError` - the image host relay
 * - `GenerationError` - the text generation relay
 *
 * # Client Messages
 *
 * `message()` is what the client sees. For upstream and store failures it is
 * a fixed sentence; the underlying error is logged by the response conversion
 * instead of being echoed back.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::generation::GenerationError;
use crate::backend::persistence::StoreError;
use crate::backend::uploads::UploadError;
use crate::shared::{ErrorKind, SharedError};

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use devhub::backend::error::BackendError;
///
/// let err = BackendError::not_found("Snippet");
/// assert_eq!(err.message(), "Snippet not found");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// A required field is missing or malformed
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// The request body itself could not be read
    #[error("Bad request: {message}")]
    BadRequest {
        /// Human-readable error message
        message: String,
    },

    /// The id in the request does not resolve to a document
    #[error("{entity} not found")]
    NotFound {
        /// Display name of the entity that was looked up
        entity: &'static str,
    },

    /// Document store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Image upload failure
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// Text generation failure
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl BackendError {
    /// Create a new bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a new not-found error for `entity`
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation`, `BadRequest` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - `Store` - 409 Conflict for duplicates, 500 otherwise
    /// - `Upload` - 400 for rejected formats, 503 when unconfigured, 502 otherwise
    /// - `Generation` - 400 for an empty prompt, 503 when unconfigured, 502 otherwise
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store(StoreError::Duplicate { .. }) => StatusCode::CONFLICT,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upload(UploadError::UnsupportedFormat { .. }) => StatusCode::BAD_REQUEST,
            Self::Upload(UploadError::NotConfigured) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upload(_) => StatusCode::BAD_GATEWAY,
            Self::Generation(GenerationError::EmptyPrompt) => StatusCode::BAD_REQUEST,
            Self::Generation(GenerationError::NotConfigured) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Generation(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Get the envelope kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::BadRequest { .. } => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Store(StoreError::Duplicate { .. }) => ErrorKind::Conflict,
            Self::Store(_) => ErrorKind::Internal,
            Self::Upload(UploadError::NotConfigured) => ErrorKind::Unavailable,
            Self::Upload(_) => ErrorKind::Upload,
            Self::Generation(GenerationError::EmptyPrompt) => ErrorKind::Validation,
            Self::Generation(GenerationError::NotConfigured) => ErrorKind::Unavailable,
            Self::Generation(_) => ErrorKind::Upstream,
        }
    }

    /// Get the client-safe error message
    pub fn message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::BadRequest { message } => message.clone(),
            Self::NotFound { entity } => format!("{entity} not found"),
            Self::Store(StoreError::Duplicate { collection, .. }) => {
                format!("A document with this id already exists in {collection}")
            }
            Self::Store(_) => "Database error".to_string(),
            Self::Upload(UploadError::UnsupportedFormat { .. }) => {
                "Unsupported image format, expected jpeg, jpg or png".to_string()
            }
            Self::Upload(UploadError::NotConfigured) => "Image uploads are not configured".to_string(),
            Self::Upload(_) => "Image upload failed".to_string(),
            Self::Generation(GenerationError::EmptyPrompt) => "Prompt is required".to_string(),
            Self::Generation(GenerationError::NotConfigured) => {
                "Text generation is not configured".to_string()
            }
            Self::Generation(_) => "Text generation failed".to_string(),
        }
    }

    /// Whether the failure is on our side or upstream, as opposed to the
    /// client's request
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}
