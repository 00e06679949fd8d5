//! Blog Document

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_document_id, Document, UserRef};

/// A long-form post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    /// Estimated reading time in minutes
    pub reading_time: u32,
    /// Patreon link or id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patreon: Option<String>,
    /// Free-text citations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<String>,
    /// Free-text tags, covered by the blog text index
    pub tags: String,
    pub uploaded_by: UserRef,
    pub uploaded_at: DateTime<Utc>,
    /// URL returned by the image host for the preview upload
    pub preview_image: String,
}

/// Validated text fields of a blog create or update
#[derive(Debug, Clone, PartialEq)]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub reading_time: u32,
    pub patreon: Option<String>,
    pub sources: Option<String>,
    pub tags: String,
    pub uploaded_by: UserRef,
}

impl Blog {
    /// Create a blog around an already-uploaded preview image
    pub fn create(draft: BlogDraft, preview_image: String) -> Self {
        Self {
            id: new_document_id(),
            title: draft.title,
            content: draft.content,
            excerpt: draft.excerpt,
            reading_time: draft.reading_time,
            patreon: draft.patreon,
            sources: draft.sources,
            tags: draft.tags,
            uploaded_by: draft.uploaded_by,
            uploaded_at: Utc::now(),
            preview_image,
        }
    }

    /// Full replace of the text fields. The preview is swapped only when a new
    /// upload was made.
    pub fn apply(&mut self, draft: BlogDraft, preview_image: Option<String>) {
        self.title = draft.title;
        self.content = draft.content;
        self.excerpt = draft.excerpt;
        self.reading_time = draft.reading_time;
        self.patreon = draft.patreon;
        self.sources = draft.sources;
        self.tags = draft.tags;
        self.uploaded_by = draft.uploaded_by;
        self.uploaded_at = Utc::now();
        if let Some(preview_image) = preview_image {
            self.preview_image = preview_image;
        }
    }

    /// Case-insensitive match against title, excerpt and tags
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        [&self.title, &self.excerpt, &self.tags]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

impl Document for Blog {
    const COLLECTION: &'static str = "blogs";

    fn id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> Option<&str> {
        Some(&self.uploaded_by.user_id)
    }
}
