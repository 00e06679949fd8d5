/**
 * Chatroom Handlers
 *
 * # Routes
 *
 * - `POST /create/chatroom` - multipart create with a required `file`, 201
 * - `GET /get/chatrooms` - list all
 * - `POST /get/chatroom` - fetch by id
 * - `PUT /update/chatroom` - multipart name, description and optional image
 * - `POST /chatroom/delete` - delete, returning the removed room
 * - `POST /add/add_participant` - join
 * - `POST /add/add_message` - post a message
 * - `POST /leave/user` - leave
 *
 * Every mutation answers with the room as it is after the change.
 */

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};

use super::types::{chatroom_draft, JoinRequest, LeaveRequest, PostMessageRequest};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::extract::{ApiJson, IdRequest};
use crate::backend::persistence::{ChatroomRepository, Membership};
use crate::backend::uploads::{MultipartForm, UploadRelay};
use crate::shared::content::{Chatroom, ChatroomDetails};
use crate::shared::error::require;
use crate::shared::{ApiResponse, SharedError};

/// Shared handle to the chatroom collection
pub type ChatroomStore = Arc<dyn ChatroomRepository>;

const ENTITY: &str = "Chatroom";

pub async fn create_chatroom(
    State(store): State<ChatroomStore>,
    State(uploads): State<UploadRelay>,
    multipart: Multipart,
) -> BackendResult<(StatusCode, Json<ApiResponse<Chatroom>>)> {
    let mut form = MultipartForm::read(multipart).await?;
    let draft = chatroom_draft(&mut form)?;
    let file = form.take_file().ok_or(SharedError::missing("file"))?;

    let image = uploads.store(file).await?;
    let room = store.create(Chatroom::create(draft, image.secure_url)).await?;

    tracing::info!(id = %room.id, name = %room.name, "Chatroom created");
    Ok((StatusCode::CREATED, Json(ApiResponse::success(room))))
}

pub async fn list_chatrooms(
    State(store): State<ChatroomStore>,
) -> BackendResult<Json<ApiResponse<Vec<Chatroom>>>> {
    let rooms = store.list_all().await?;
    tracing::debug!(count = rooms.len(), "Listed chatrooms");
    Ok(Json(ApiResponse::success(rooms)))
}

pub async fn get_chatroom(
    State(store): State<ChatroomStore>,
    ApiJson(request): ApiJson<IdRequest>,
) -> BackendResult<Json<ApiResponse<Chatroom>>> {
    let id = request.require()?;
    let room = store
        .get_by_id(&id)
        .await?
        .ok_or(BackendError::not_found(ENTITY))?;
    Ok(Json(ApiResponse::success(room)))
}

/// Participants and messages are never touched by an update
pub async fn update_chatroom(
    State(store): State<ChatroomStore>,
    State(uploads): State<UploadRelay>,
    multipart: Multipart,
) -> BackendResult<Json<ApiResponse<Chatroom>>> {
    let mut form = MultipartForm::read(multipart).await?;
    let id = require("id", form.take("id"))?;
    let name = require("name", form.take("name"))?;
    let description = require("description", form.take("description"))?;

    if store.get_by_id(&id).await?.is_none() {
        return Err(BackendError::not_found(ENTITY));
    }

    let image = match form.take_file() {
        Some(file) => Some(uploads.store(file).await?.secure_url),
        None => None,
    };

    let details = ChatroomDetails {
        name,
        description,
        image,
    };
    let room = store
        .update_details(&id, details)
        .await?
        .ok_or(BackendError::not_found(ENTITY))?;

    tracing::info!(%id, "Chatroom updated");
    Ok(Json(ApiResponse::success(room)))
}

pub async fn delete_chatroom(
    State(store): State<ChatroomStore>,
    ApiJson(request): ApiJson<IdRequest>,
) -> BackendResult<Json<ApiResponse<Chatroom>>> {
    let id = request.require()?;
    let deleted = store
        .delete_by_id(&id)
        .await?
        .ok_or(BackendError::not_found(ENTITY))?;

    tracing::info!(%id, "Chatroom deleted");
    Ok(Json(ApiResponse::success(deleted)))
}

pub async fn add_participant(
    State(store): State<ChatroomStore>,
    ApiJson(request): ApiJson<JoinRequest>,
) -> BackendResult<Json<ApiResponse<Chatroom>>> {
    let (id, participant) = request.validate()?;
    let user_id = participant.user_id.clone();

    let membership = store
        .add_participant(&id, participant)
        .await?
        .ok_or(BackendError::not_found(ENTITY))?;

    match &membership {
        Membership::Joined(_) => tracing::info!(%id, %user_id, "User joined chatroom"),
        Membership::AlreadyMember(_) => {
            tracing::debug!(%id, %user_id, "User already in chatroom")
        }
    }
    Ok(Json(ApiResponse::success(membership.into_chatroom())))
}

pub async fn add_message(
    State(store): State<ChatroomStore>,
    ApiJson(request): ApiJson<PostMessageRequest>,
) -> BackendResult<Json<ApiResponse<Chatroom>>> {
    let (id, message) = request.validate()?;
    let sender = message.sender.user_id.clone();

    let room = store
        .push_message(&id, message)
        .await?
        .ok_or(BackendError::not_found(ENTITY))?;

    tracing::info!(%id, %sender, messages = room.messages.len(), "Message posted");
    Ok(Json(ApiResponse::success(room)))
}

pub async fn leave_chatroom(
    State(store): State<ChatroomStore>,
    ApiJson(request): ApiJson<LeaveRequest>,
) -> BackendResult<Json<ApiResponse<Chatroom>>> {
    let (id, user_id) = request.validate()?;

    let room = store
        .remove_participant(&id, &user_id)
        .await?
        .ok_or(BackendError::not_found(ENTITY))?;

    tracing::info!(%id, %user_id, "User left chatroom");
    Ok(Json(ApiResponse::success(room)))
}
