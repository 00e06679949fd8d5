//! Multipart Body Reader
//!
//! Blog and chatroom routes receive their text fields and the image in one
//! `multipart/form-data` body. The whole body is read up front so the text
//! fields can be validated before the image is sent anywhere.

use std::collections::HashMap;

use axum::extract::Multipart;

use super::UploadedFile;
use crate::backend::error::BackendResult;

/// Name of the file part
pub const FILE_FIELD: &str = "file";

/// A fully read multipart body
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    file: Option<UploadedFile>,
}

impl MultipartForm {
    /// Drain `multipart` into text fields and the optional `file` part.
    ///
    /// A `file` part with no bytes is treated as absent.
    pub async fn read(mut multipart: Multipart) -> BackendResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            if name == FILE_FIELD {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    tracing::debug!(%file_name, size = bytes.len(), "Received file part");
                    form.file = Some(UploadedFile {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
            } else {
                let value = field.text().await?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// Remove and return the text field `name`
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    /// Remove and return the file part
    pub fn take_file(&mut self) -> Option<UploadedFile> {
        self.file.take()
    }

    #[cfg(test)]
    pub(crate) fn from_parts(fields: &[(&str, &str)], file: Option<UploadedFile>) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            file,
        }
    }
}
