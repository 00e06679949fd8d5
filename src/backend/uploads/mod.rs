//! Upload Relay
//!
//! Forwards image files received in multipart requests to the external image
//! host and hands back the URL the host assigned. The URL is what gets
//! recorded on the owning blog or chatroom.
//!
//! # Module Structure
//!
//! ```text
//! uploads/
//! ├── mod.rs        - Error type, file type and format check
//! ├── form.rs       - Multipart body reader
//! └── cloudinary.rs - Signed upload client for the image host
//! ```
//!
//! Only `jpeg`, `jpg` and `png` files are accepted. Other formats are
//! rejected locally, before any bytes leave the process.

pub mod cloudinary;
pub mod form;

use bytes::Bytes;
use thiserror::Error;

pub use cloudinary::{CloudinaryConfig, StoredImage, UploadRelay};
pub use form::MultipartForm;

/// Image formats the relay accepts
pub const ALLOWED_FORMATS: [&str; 3] = ["jpeg", "png", "jpg"];

const ALLOWED_CONTENT_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/jpg"];

/// Upload failures
#[derive(Debug, Error)]
pub enum UploadError {
    /// The file is not a jpeg or png
    #[error("unsupported image format: {file_name}")]
    UnsupportedFormat { file_name: String },

    /// No image host credentials were configured
    #[error("image host is not configured")]
    NotConfigured,

    /// The image host rejected the upload or could not be reached
    #[error("image host failed: {message}")]
    Upstream { message: String },
}

/// A file part read from a multipart request
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedFile {
    /// Lower-cased extension of the file name, if it has one
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, extension)| extension.to_ascii_lowercase())
    }
}

/// Reject anything that is not an allowed image.
///
/// The extension decides when there is one; the declared content type is only
/// consulted for files uploaded without an extension.
pub fn check_format(file: &UploadedFile) -> Result<(), UploadError> {
    let allowed = match file.extension() {
        Some(extension) => ALLOWED_FORMATS.contains(&extension.as_str()),
        None => file
            .content_type
            .as_deref()
            .is_some_and(|content_type| ALLOWED_CONTENT_TYPES.contains(&content_type)),
    };

    if allowed {
        Ok(())
    } else {
        Err(UploadError::UnsupportedFormat {
            file_name: file.file_name.clone(),
        })
    }
}
