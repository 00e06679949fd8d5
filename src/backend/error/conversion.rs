/**
 * Error Conversion
 *
 * This module turns backend errors into HTTP responses and adapts axum's
 * extractor rejections into backend errors.
 *
 * # Response Format
 *
 * Error responses use the failure half of the shared envelope:
 * ```json
 * {
 *   "ok": false,
 *   "kind": "validation",
 *   "message": "Missing required field 'code'"
 * }
 * ```
 */

use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection},
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;
use crate::shared::ApiResponse;

impl IntoResponse for BackendError {
    /// Convert a backend error into an HTTP response
    ///
    /// Server-side failures are logged with their full cause at `error`
    /// level; client mistakes at `warn`.
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_server_error() {
            tracing::error!(status = status.as_u16(), error = ?self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), "Request rejected: {}", self);
        }

        let body = ApiResponse::<()>::failure(self.kind(), self.message());
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<MultipartError> for BackendError {
    fn from(err: MultipartError) -> Self {
        Self::bad_request(format!("Invalid multipart body: {}", err.body_text()))
    }
}
