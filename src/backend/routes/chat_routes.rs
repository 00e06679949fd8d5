/**
 * Chatroom Routes
 *
 * - `POST /create/chatroom` (multipart)
 * - `GET /get/chatrooms`
 * - `POST /get/chatroom`
 * - `PUT /update/chatroom` (multipart)
 * - `POST /chatroom/delete`
 * - `POST /add/add_participant`
 * - `POST /add/add_message`
 * - `POST /leave/user`
 */

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::backend::chatrooms::{
    add_message, add_participant, create_chatroom, delete_chatroom, get_chatroom,
    leave_chatroom, list_chatrooms, update_chatroom,
};
use crate::backend::server::state::AppState;

/// Configure chatroom routes
pub fn configure_chat_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/create/chatroom", post(create_chatroom))
        .route("/get/chatrooms", get(list_chatrooms))
        .route("/get/chatroom", post(get_chatroom))
        .route("/update/chatroom", put(update_chatroom))
        .route("/chatroom/delete", post(delete_chatroom))
        // Membership and messages
        .route("/add/add_participant", post(add_participant))
        .route("/add/add_message", post(add_message))
        .route("/leave/user", post(leave_chatroom))
}
