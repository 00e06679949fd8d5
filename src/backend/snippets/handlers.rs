/**
 * Snippet Handlers
 *
 * # Routes
 *
 * - `POST /store/code` - create, 201
 * - `POST /get/code` - fetch by id
 * - `GET /get/codes` - list all
 * - `POST /get/user/snippets` - list by uploader id
 * - `PUT /update/code` - replace code, description, uploader and date
 * - `POST /snippet/delete` - delete, returning the removed snippet
 *
 * Lookups by id answer 404 when the id does not resolve.
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::types::{StoreSnippetRequest, UpdateSnippetRequest};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::extract::{ApiJson, IdRequest};
use crate::backend::persistence::Repository;
use crate::shared::content::CodeSnippet;
use crate::shared::ApiResponse;

/// Shared handle to the snippet collection
pub type SnippetStore = Arc<dyn Repository<CodeSnippet>>;

const ENTITY: &str = "Snippet";

pub async fn store_snippet(
    State(store): State<SnippetStore>,
    ApiJson(request): ApiJson<StoreSnippetRequest>,
) -> BackendResult<(StatusCode, Json<ApiResponse<CodeSnippet>>)> {
    let (draft, language) = request.validate()?;
    let snippet = store.create(CodeSnippet::create(draft, language)).await?;

    tracing::info!(id = %snippet.id, user_id = %snippet.uploaded_by.user_id, "Snippet stored");
    Ok((StatusCode::CREATED, Json(ApiResponse::success(snippet))))
}

pub async fn get_snippet(
    State(store): State<SnippetStore>,
    ApiJson(request): ApiJson<IdRequest>,
) -> BackendResult<Json<ApiResponse<CodeSnippet>>> {
    let id = request.require()?;
    let snippet = store
        .get_by_id(&id)
        .await?
        .ok_or(BackendError::not_found(ENTITY))?;
    Ok(Json(ApiResponse::success(snippet)))
}

pub async fn list_snippets(
    State(store): State<SnippetStore>,
) -> BackendResult<Json<ApiResponse<Vec<CodeSnippet>>>> {
    let snippets = store.list_all().await?;
    tracing::debug!(count = snippets.len(), "Listed snippets");
    Ok(Json(ApiResponse::success(snippets)))
}

/// The `id` in the body is the uploader's user id
pub async fn list_user_snippets(
    State(store): State<SnippetStore>,
    ApiJson(request): ApiJson<IdRequest>,
) -> BackendResult<Json<ApiResponse<Vec<CodeSnippet>>>> {
    let user_id = request.require()?;
    let snippets = store.list_by_owner(&user_id).await?;
    tracing::debug!(%user_id, count = snippets.len(), "Listed user snippets");
    Ok(Json(ApiResponse::success(snippets)))
}

pub async fn update_snippet(
    State(store): State<SnippetStore>,
    ApiJson(request): ApiJson<UpdateSnippetRequest>,
) -> BackendResult<Json<ApiResponse<CodeSnippet>>> {
    let (id, draft) = request.validate()?;
    let mut snippet = store
        .get_by_id(&id)
        .await?
        .ok_or(BackendError::not_found(ENTITY))?;

    snippet.apply(draft);
    let updated = store
        .replace_by_id(&id, snippet)
        .await?
        .ok_or(BackendError::not_found(ENTITY))?;

    tracing::info!(%id, "Snippet updated");
    Ok(Json(ApiResponse::success(updated)))
}

pub async fn delete_snippet(
    State(store): State<SnippetStore>,
    ApiJson(request): ApiJson<IdRequest>,
) -> BackendResult<Json<ApiResponse<CodeSnippet>>> {
    let id = request.require()?;
    let deleted = store
        .delete_by_id(&id)
        .await?
        .ok_or(BackendError::not_found(ENTITY))?;

    tracing::info!(%id, "Snippet deleted");
    Ok(Json(ApiResponse::success(deleted)))
}
