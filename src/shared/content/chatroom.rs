//! Chatroom Document
//!
//! A chatroom owns two ordered sequences: `participants` and `messages`.
//! Both are only ever changed through single-element appends and a
//! filter-by-user removal, so their order is chronological.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_document_id, Document, UserRef};

/// Role of a participant inside a room
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The creator
    Admin,
    /// Anyone who joined afterwards
    Participant,
}

/// A room member, a user snapshot plus a role
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub user_id: String,
    pub user_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_image: Option<String>,
    pub user_role: Role,
}

impl Participant {
    pub fn new(user: UserRef, role: Role) -> Self {
        Self {
            user_id: user.user_id,
            user_email: user.user_email,
            user_image: user.user_image,
            user_role: role,
        }
    }
}

/// One entry of the message log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub sender: UserRef,
    pub content: String,
    /// Assigned by the server when the message is accepted
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: UserRef, content: String) -> Self {
        Self {
            sender,
            content,
            sent_at: Utc::now(),
        }
    }
}

/// A named room
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chatroom {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    /// URL of the room image on the image host
    pub image: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Validated fields for creating a room
#[derive(Debug, Clone, PartialEq)]
pub struct ChatroomDraft {
    pub name: String,
    pub description: String,
    pub creator: UserRef,
}

/// Fields an update may change. Membership and history are never part of it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatroomDetails {
    pub name: String,
    pub description: String,
    /// New image URL, `None` keeps the current one
    pub image: Option<String>,
}

impl Chatroom {
    /// Create a room whose only participant is its creator, as admin
    pub fn create(draft: ChatroomDraft, image: String) -> Self {
        Self {
            id: new_document_id(),
            name: draft.name,
            description: draft.description,
            image,
            created_at: Utc::now(),
            participants: vec![Participant::new(draft.creator, Role::Admin)],
            messages: Vec::new(),
        }
    }

    pub fn has_participant(&self, user_id: &str) -> bool {
        self.participants.iter().any(|p| p.user_id == user_id)
    }

    /// Append `participant` unless someone with the same user id is already
    /// present. Returns whether the list changed.
    pub fn join(&mut self, participant: Participant) -> bool {
        if self.has_participant(&participant.user_id) {
            return false;
        }
        self.participants.push(participant);
        true
    }

    /// Drop every participant entry with `user_id`, preserving the order of
    /// the rest
    pub fn leave(&mut self, user_id: &str) {
        self.participants.retain(|p| p.user_id != user_id);
    }

    pub fn post(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn apply(&mut self, details: ChatroomDetails) {
        self.name = details.name;
        self.description = details.description;
        if let Some(image) = details.image {
            self.image = image;
        }
    }
}

impl Document for Chatroom {
    const COLLECTION: &'static str = "chatrooms";

    fn id(&self) -> &str {
        &self.id
    }
}
