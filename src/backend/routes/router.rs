/**
 * Router Configuration
 *
 * Combines the route groups into one router and wraps it in the shared
 * middleware stack.
 *
 * # Middleware
 *
 * - `TraceLayer` - one span per request
 * - `CorsLayer::permissive` - the API is called directly from browsers on
 *   other origins
 * - `DefaultBodyLimit` - raised so image uploads fit
 */

use axum::{extract::DefaultBodyLimit, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::chat_routes::configure_chat_routes;
use crate::backend::server::state::AppState;
use crate::shared::ApiResponse;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Body of `GET /health`
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

async fn health() -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::success(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

async fn not_found() -> BackendError {
    BackendError::not_found("Route")
}

/// Create the Axum router with all routes configured
///
/// 1. **API Routes**: snippets, blogs, code generation
/// 2. **Chat Routes**: chatrooms, participants, messages
/// 3. **Health**: `GET /health`
/// 4. **Fallback**: 404 in the failure envelope
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", get(health));

    let router = configure_api_routes(router);
    let router = configure_chat_routes(router);

    router
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .with_state(app_state)
}
