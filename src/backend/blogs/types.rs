//! Blog Request Types

use serde::Deserialize;

use crate::backend::uploads::MultipartForm;
use crate::shared::content::{BlogDraft, UserRef};
use crate::shared::error::{optional, require};
use crate::shared::SharedError;

/// Read and validate the text fields of a blog multipart body
pub fn blog_draft(form: &mut MultipartForm) -> Result<BlogDraft, SharedError> {
    let title = require("title", form.take("title"))?;
    let content = require("content", form.take("content"))?;
    let excerpt = require("excerpt", form.take("excerpt"))?;
    let reading_time = parse_reading_time(form.take("reading_time"))?;
    let tags = require("tags", form.take("tags"))?;
    let uploaded_by = UserRef::from_fields(
        form.take("user_id"),
        form.take("user_email"),
        form.take("user_image"),
    )?;

    Ok(BlogDraft {
        title,
        content,
        excerpt,
        reading_time,
        patreon: optional(form.take("patreon")),
        sources: optional(form.take("sources")),
        tags,
        uploaded_by,
    })
}

fn parse_reading_time(value: Option<String>) -> Result<u32, SharedError> {
    let value = require("reading_time", value)?;
    value.trim().parse().map_err(|_| {
        SharedError::validation("reading_time", "must be a whole number of minutes")
    })
}

/// Body of `POST /search/blogs`
#[derive(Debug, Default, Deserialize)]
pub struct SearchBlogsRequest {
    pub query: Option<String>,
}
