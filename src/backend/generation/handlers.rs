/**
 * Generation Handler
 *
 * `POST /ai/code/generate`
 *
 * ```http
 * POST /ai/code/generate HTTP/1.1
 * Content-Type: application/json
 *
 * { "prompt": "Write a binary search in Rust" }
 * ```
 *
 * ```json
 * { "ok": true, "data": { "response": "fn binary_search(...) { ... }" } }
 * ```
 */

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::GenerationRelay;
use crate::backend::error::BackendResult;
use crate::backend::extract::ApiJson;
use crate::shared::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateResponse {
    pub response: String,
}

/// Forward the prompt and return the generated text
pub async fn generate_code(
    State(relay): State<GenerationRelay>,
    ApiJson(request): ApiJson<GenerateRequest>,
) -> BackendResult<Json<ApiResponse<GenerateResponse>>> {
    let prompt = request.prompt.unwrap_or_default();
    tracing::debug!(prompt_len = prompt.len(), "Generation request");

    let response = relay.generate(&prompt).await?;

    tracing::info!(response_len = response.len(), "Generation completed");
    Ok(Json(ApiResponse::success(GenerateResponse { response })))
}
