//! Embedded User Reference
//!
//! Snippets, blogs and chatrooms carry a copy of the acting user's identity
//! taken at write time. The copy is never refreshed: if a user later changes
//! their email or avatar, documents written before the change keep the old
//! values.

use serde::{Deserialize, Serialize};

use crate::shared::error::{optional, require, SharedError};

/// Snapshot of a user's identity at the time a document was written
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRef {
    /// Caller-supplied user id (trusted as-is, there is no authentication)
    pub user_id: String,
    /// User email, always present
    pub user_email: String,
    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_image: Option<String>,
}

impl UserRef {
    /// Build a snapshot from raw request fields
    pub fn from_fields(
        user_id: Option<String>,
        user_email: Option<String>,
        user_image: Option<String>,
    ) -> Result<Self, SharedError> {
        Ok(Self {
            user_id: require("user_id", user_id)?,
            user_email: require("user_email", user_email)?,
            user_image: optional(user_image),
        })
    }
}
