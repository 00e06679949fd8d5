//! Persistence Module
//!
//! The document store behind every route. Handlers only see the traits in
//! this module; two adapters implement them:
//!
//! - **`mongo`** - MongoDB collections, used when `ATLAS_URI` is configured
//! - **`memory`** - an in-process store, used when no database is configured
//!   and in tests. It matches the MongoDB adapter on every operation except
//!   [`BlogRepository::search`], see there.
//!
//! # Sequence Mutations
//!
//! Chatroom participants and messages are changed through dedicated
//! operations on [`ChatroomRepository`] instead of read-modify-write of the
//! whole document. Each adapter applies them atomically (`$push` / `$pull` on
//! MongoDB, a single write lock in memory), so two concurrent joins or posts
//! on the same room can never overwrite each other.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::content::{
    Blog, ChatMessage, Chatroom, ChatroomDetails, Document, Participant,
};

pub use memory::MemoryRepository;
pub use mongo::{MongoRepository, MongoStore};

/// Errors surfaced by the store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    /// A document with the same `_id` already exists
    #[error("duplicate document in {collection}: {message}")]
    Duplicate {
        collection: &'static str,
        message: String,
    },

    /// A document could not be converted to or from the stored format
    #[error("document serialization failed: {message}")]
    Serialization { message: String },

    /// Connectivity or query failure
    #[error("document store failed: {message}")]
    Backend { message: String },
}

impl StoreError {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// CRUD over one collection.
///
/// Lookups by an id that does not exist return `Ok(None)`; deciding whether
/// that is an error is left to the caller.
#[async_trait]
pub trait Repository<T: Document>: Send + Sync {
    /// Insert a new document, failing with `Duplicate` if its id is taken
    async fn create(&self, doc: T) -> StoreResult<T>;

    async fn get_by_id(&self, id: &str) -> StoreResult<Option<T>>;

    /// Every document, in insertion order
    async fn list_all(&self) -> StoreResult<Vec<T>>;

    /// Documents whose `uploaded_by.user_id` equals `user_id`
    async fn list_by_owner(&self, user_id: &str) -> StoreResult<Vec<T>>;

    /// Replace the stored document with `doc`, returning the new version
    async fn replace_by_id(&self, id: &str, doc: T) -> StoreResult<Option<T>>;

    /// Delete and return the removed document
    async fn delete_by_id(&self, id: &str) -> StoreResult<Option<T>>;
}

/// Blog collection with text search
#[async_trait]
pub trait BlogRepository: Repository<Blog> {
    /// Blogs whose title, excerpt or tags match `term`.
    ///
    /// Matching differs between adapters. MongoDB runs a `$text` query, which
    /// matches stemmed whole words ("own" does not find "Ownership"). The
    /// memory store does a plain case-insensitive substring match. Both agree
    /// on an exact word that appears in the text.
    async fn search(&self, term: &str) -> StoreResult<Vec<Blog>>;
}

/// Outcome of a join request
#[derive(Debug, Clone, PartialEq)]
pub enum Membership {
    /// The user was appended to the participant list
    Joined(Chatroom),
    /// The user was already a participant, nothing changed
    AlreadyMember(Chatroom),
}

impl Membership {
    pub fn into_chatroom(self) -> Chatroom {
        match self {
            Self::Joined(room) | Self::AlreadyMember(room) => room,
        }
    }
}

/// Chatroom collection with atomic sequence operations.
///
/// Every method returns the chatroom as it is after the change, or `None`
/// when the id does not exist.
#[async_trait]
pub trait ChatroomRepository: Repository<Chatroom> {
    /// Set name, description and optionally image, leaving participants and
    /// messages untouched
    async fn update_details(
        &self,
        id: &str,
        details: ChatroomDetails,
    ) -> StoreResult<Option<Chatroom>>;

    /// Append `participant` unless a participant with the same user id exists
    async fn add_participant(
        &self,
        id: &str,
        participant: Participant,
    ) -> StoreResult<Option<Membership>>;

    /// Remove every participant entry with `user_id`
    async fn remove_participant(&self, id: &str, user_id: &str) -> StoreResult<Option<Chatroom>>;

    /// Append `message` to the log
    async fn push_message(&self, id: &str, message: ChatMessage) -> StoreResult<Option<Chatroom>>;
}
