//! Chatroom Request Types

use serde::Deserialize;

use crate::backend::uploads::MultipartForm;
use crate::shared::content::{ChatMessage, ChatroomDraft, Participant, Role, UserRef};
use crate::shared::error::require;
use crate::shared::SharedError;

/// Text fields of `POST /create/chatroom`
pub fn chatroom_draft(form: &mut MultipartForm) -> Result<ChatroomDraft, SharedError> {
    Ok(ChatroomDraft {
        name: require("name", form.take("name"))?,
        description: require("description", form.take("description"))?,
        creator: UserRef::from_fields(
            form.take("user_id"),
            form.take("user_email"),
            form.take("user_image"),
        )?,
    })
}

/// Body of `POST /add/add_participant`
#[derive(Debug, Default, Deserialize)]
pub struct JoinRequest {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub user_email: Option<String>,
    pub user_image: Option<String>,
}

impl JoinRequest {
    pub fn validate(self) -> Result<(String, Participant), SharedError> {
        let id = require("id", self.id)?;
        let user = UserRef::from_fields(self.user_id, self.user_email, self.user_image)?;
        Ok((id, Participant::new(user, Role::Participant)))
    }
}

/// Body of `POST /add/add_message`
#[derive(Debug, Default, Deserialize)]
pub struct PostMessageRequest {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub user_email: Option<String>,
    pub user_image: Option<String>,
    pub content: Option<String>,
}

impl PostMessageRequest {
    pub fn validate(self) -> Result<(String, ChatMessage), SharedError> {
        let id = require("id", self.id)?;
        let sender = UserRef::from_fields(self.user_id, self.user_email, self.user_image)?;
        let content = require("content", self.content)?;
        Ok((id, ChatMessage::new(sender, content)))
    }
}

/// Body of `POST /leave/user`
#[derive(Debug, Default, Deserialize)]
pub struct LeaveRequest {
    pub id: Option<String>,
    pub user_id: Option<String>,
}

impl LeaveRequest {
    pub fn validate(self) -> Result<(String, String), SharedError> {
        Ok((require("id", self.id)?, require("user_id", self.user_id)?))
    }
}
