//! Snippet Request Types
//!
//! Every field is optional at the serde level so that a missing field is
//! reported through the validation error, not as a JSON rejection.

use serde::Deserialize;

use crate::shared::content::{SnippetDraft, UserRef};
use crate::shared::error::{optional, require};
use crate::shared::SharedError;

/// Body of `POST /store/code`
#[derive(Debug, Default, Deserialize)]
pub struct StoreSnippetRequest {
    pub code: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub user_id: Option<String>,
    pub user_email: Option<String>,
    pub user_image: Option<String>,
}

impl StoreSnippetRequest {
    /// Validate into a draft and the required language
    pub fn validate(self) -> Result<(SnippetDraft, String), SharedError> {
        let code = require("code", self.code)?;
        let language = require("language", self.language)?;
        let uploaded_by = UserRef::from_fields(self.user_id, self.user_email, self.user_image)?;

        Ok((
            SnippetDraft {
                code,
                description: optional(self.description),
                language: None,
                uploaded_by,
            },
            language,
        ))
    }
}

/// Body of `PUT /update/code`
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSnippetRequest {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub user_id: Option<String>,
    pub user_email: Option<String>,
    pub user_image: Option<String>,
}

impl UpdateSnippetRequest {
    pub fn validate(self) -> Result<(String, SnippetDraft), SharedError> {
        let id = require("id", self.id)?;
        let code = require("code", self.code)?;
        let uploaded_by = UserRef::from_fields(self.user_id, self.user_email, self.user_image)?;

        Ok((
            id,
            SnippetDraft {
                code,
                description: optional(self.description),
                language: optional(self.language),
                uploaded_by,
            },
        ))
    }
}
