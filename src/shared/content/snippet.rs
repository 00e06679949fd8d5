//! Code Snippet Document

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_document_id, Document, UserRef};

/// A stored code sample
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeSnippet {
    #[serde(rename = "_id")]
    pub id: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub uploaded_by: UserRef,
    pub language: String,
    /// Set on creation and reset on every update
    pub uploaded_at: DateTime<Utc>,
}

/// Validated fields for creating or replacing a snippet
///
/// `language` is optional so updates can leave it alone; creation requires it
/// and the request type enforces that before building a draft.
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetDraft {
    pub code: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub uploaded_by: UserRef,
}

impl CodeSnippet {
    /// Create a new snippet with a fresh id and upload time
    pub fn create(draft: SnippetDraft, language: String) -> Self {
        Self {
            id: new_document_id(),
            code: draft.code,
            description: draft.description,
            uploaded_by: draft.uploaded_by,
            language,
            uploaded_at: Utc::now(),
        }
    }

    /// Replace code, description, uploader and date in place.
    ///
    /// The language is only replaced when the draft carries one.
    pub fn apply(&mut self, draft: SnippetDraft) {
        self.code = draft.code;
        self.description = draft.description;
        self.uploaded_by = draft.uploaded_by;
        if let Some(language) = draft.language {
            self.language = language;
        }
        self.uploaded_at = Utc::now();
    }
}

impl Document for CodeSnippet {
    const COLLECTION: &'static str = "snippets";

    fn id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> Option<&str> {
        Some(&self.uploaded_by.user_id)
    }
}
