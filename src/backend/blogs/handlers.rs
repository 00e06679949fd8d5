/**
 * Blog Handlers
 *
 * # Routes
 *
 * - `POST /store/blog` - multipart create with a required preview `file`, 201
 * - `POST /get/blog` - fetch by id
 * - `GET /get/blogs` - list all
 * - `POST /get/user/blogs` - list by uploader id
 * - `POST /search/blogs` - text search over title, excerpt and tags
 * - `PUT /update/blog` - multipart full replace, `file` optional
 * - `POST /blog/delete` - delete, returning the removed blog
 *
 * # Upload Order
 *
 * The multipart body is read completely and every text field validated
 * before the image goes to the image host. A rejected request therefore
 * never leaves an orphaned upload behind.
 */

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};

use super::types::{blog_draft, SearchBlogsRequest};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::extract::{ApiJson, IdRequest};
use crate::backend::persistence::BlogRepository;
use crate::backend::uploads::{MultipartForm, UploadRelay};
use crate::shared::content::Blog;
use crate::shared::error::require;
use crate::shared::{ApiResponse, SharedError};

/// Shared handle to the blog collection
pub type BlogStore = Arc<dyn BlogRepository>;

const ENTITY: &str = "Blog";

pub async fn store_blog(
    State(store): State<BlogStore>,
    State(uploads): State<UploadRelay>,
    multipart: Multipart,
) -> BackendResult<(StatusCode, Json<ApiResponse<Blog>>)> {
    let mut form = MultipartForm::read(multipart).await?;
    let draft = blog_draft(&mut form)?;
    let file = form.take_file().ok_or(SharedError::missing("file"))?;

    let image = uploads.store(file).await?;
    let blog = store.create(Blog::create(draft, image.secure_url)).await?;

    tracing::info!(id = %blog.id, user_id = %blog.uploaded_by.user_id, "Blog stored");
    Ok((StatusCode::CREATED, Json(ApiResponse::success(blog))))
}

pub async fn get_blog(
    State(store): State<BlogStore>,
    ApiJson(request): ApiJson<IdRequest>,
) -> BackendResult<Json<ApiResponse<Blog>>> {
    let id = request.require()?;
    let blog = store
        .get_by_id(&id)
        .await?
        .ok_or(BackendError::not_found(ENTITY))?;
    Ok(Json(ApiResponse::success(blog)))
}

pub async fn list_blogs(
    State(store): State<BlogStore>,
) -> BackendResult<Json<ApiResponse<Vec<Blog>>>> {
    let blogs = store.list_all().await?;
    tracing::debug!(count = blogs.len(), "Listed blogs");
    Ok(Json(ApiResponse::success(blogs)))
}

/// The `id` in the body is the uploader's user id
pub async fn list_user_blogs(
    State(store): State<BlogStore>,
    ApiJson(request): ApiJson<IdRequest>,
) -> BackendResult<Json<ApiResponse<Vec<Blog>>>> {
    let user_id = request.require()?;
    let blogs = store.list_by_owner(&user_id).await?;
    tracing::debug!(%user_id, count = blogs.len(), "Listed user blogs");
    Ok(Json(ApiResponse::success(blogs)))
}

pub async fn search_blogs(
    State(store): State<BlogStore>,
    ApiJson(request): ApiJson<SearchBlogsRequest>,
) -> BackendResult<Json<ApiResponse<Vec<Blog>>>> {
    let query = require("query", request.query)?;
    let blogs = store.search(query.trim()).await?;
    tracing::debug!(%query, count = blogs.len(), "Searched blogs");
    Ok(Json(ApiResponse::success(blogs)))
}

pub async fn update_blog(
    State(store): State<BlogStore>,
    State(uploads): State<UploadRelay>,
    multipart: Multipart,
) -> BackendResult<Json<ApiResponse<Blog>>> {
    let mut form = MultipartForm::read(multipart).await?;
    let id = require("id", form.take("id"))?;
    let draft = blog_draft(&mut form)?;

    let mut blog = store
        .get_by_id(&id)
        .await?
        .ok_or(BackendError::not_found(ENTITY))?;

    let preview_image = match form.take_file() {
        Some(file) => Some(uploads.store(file).await?.secure_url),
        None => None,
    };

    blog.apply(draft, preview_image);
    let updated = store
        .replace_by_id(&id, blog)
        .await?
        .ok_or(BackendError::not_found(ENTITY))?;

    tracing::info!(%id, "Blog updated");
    Ok(Json(ApiResponse::success(updated)))
}

pub async fn delete_blog(
    State(store): State<BlogStore>,
    ApiJson(request): ApiJson<IdRequest>,
) -> BackendResult<Json<ApiResponse<Blog>>> {
    let id = request.require()?;
    let deleted = store
        .delete_by_id(&id)
        .await?
        .ok_or(BackendError::not_found(ENTITY))?;

    tracing::info!(%id, "Blog deleted");
    Ok(Json(ApiResponse::success(deleted)))
}
