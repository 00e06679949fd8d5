//! Request Extractors
//!
//! `ApiJson` is `axum::Json` with its rejection swapped for `BackendError`,
//! so a malformed or mistyped body is answered with the failure envelope
//! instead of axum's plain-text rejection.

use axum::extract::FromRequest;

use crate::backend::error::BackendError;

/// JSON body extractor that rejects with `BackendError`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(BackendError))]
pub struct ApiJson<T>(pub T);

/// Body of every route that addresses a document by id
#[derive(Debug, Default, serde::Deserialize)]
pub struct IdRequest {
    pub id: Option<String>,
}

impl IdRequest {
    /// The id, or a missing-field error when it is absent or blank
    pub fn require(self) -> Result<String, crate::shared::SharedError> {
        crate::shared::error::require("id", self.id)
    }
}
