//! Shared Module
//!
//! Types that cross the HTTP boundary: the stored documents, the response
//! envelope every route answers with, and the validation errors raised while
//! building documents from request fields.
//!
//! Nothing in here touches the network or the database, so the types can be
//! reused by clients and by tests.

/// Stored document types
pub mod content;

/// Response envelope
pub mod envelope;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use content::{Blog, ChatMessage, Chatroom, CodeSnippet, Document, Participant, Role, UserRef};
pub use envelope::{ApiResponse, ErrorKind};
pub use error::SharedError;
