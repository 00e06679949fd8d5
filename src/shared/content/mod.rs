//! Content Module
//!
//! Document types persisted by the backend:
//!
//! - `CodeSnippet` - A stored code sample
//! - `Blog` - A long-form post with a mandatory preview image
//! - `Chatroom` - A room with a participant list and a message log
//! - `UserRef` - The embedded user snapshot all three carry
//!
//! Each top-level type implements [`Document`], which is all the persistence
//! layer needs to know to store it.

pub mod blog;
pub mod chatroom;
pub mod snippet;
pub mod user;

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

pub use blog::{Blog, BlogDraft};
pub use chatroom::{ChatMessage, Chatroom, ChatroomDetails, ChatroomDraft, Participant, Role};
pub use snippet::{CodeSnippet, SnippetDraft};
pub use user::UserRef;

/// A standalone document stored in its own collection
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    /// Collection the document lives in
    const COLLECTION: &'static str;

    /// Stored `_id`
    fn id(&self) -> &str;

    /// `uploaded_by.user_id`, for documents that have an uploader
    fn owner_id(&self) -> Option<&str> {
        None
    }
}

/// Fresh document id. Ids are stored as plain strings so they read the same in
/// BSON and JSON.
pub fn new_document_id() -> String {
    Uuid::new_v4().to_string()
}
