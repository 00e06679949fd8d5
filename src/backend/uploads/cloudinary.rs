/**
 * Image Host Client
 *
 * Signed uploads to Cloudinary's REST upload endpoint:
 *
 * ```http
 * POST {api_base}/v1_1/{cloud_name}/image/upload
 * Content-Type: multipart/form-data
 * ```
 *
 * # Signing
 *
 * The signed parameters (`allowed_formats`, `folder`, `timestamp`) are sorted
 * by name, joined as `key=value` pairs with `&`, suffixed with the API secret
 * and hashed with SHA-256. `file`, `api_key`, `signature` and
 * `signature_algorithm` are sent but never signed.
 */

use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use super::{check_format, UploadError, UploadedFile, ALLOWED_FORMATS};

/// Default REST endpoint of the image host
pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com";

/// Default folder uploads land in
pub const DEFAULT_FOLDER: &str = "CloudinaryDemo";

/// Image host credentials and placement
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub api_base: String,
    pub folder: String,
}

/// Reference to a stored image
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StoredImage {
    /// HTTPS URL of the stored image, recorded on documents
    pub secure_url: String,
    /// Host-side identifier inside the folder
    pub public_id: String,
}

#[derive(Deserialize)]
struct HostErrorBody {
    error: HostError,
}

#[derive(Deserialize)]
struct HostError {
    message: String,
}

/// Hex SHA-256 signature over the sorted `params` and the secret
pub fn sign(params: &[(&str, String)], api_secret: &str) -> String {
    let mut sorted: Vec<_> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    hex::encode(Sha256::digest(format!("{to_sign}{api_secret}").as_bytes()))
}

/// Relay from multipart uploads to the image host
///
/// Cheap to clone; the HTTP client is shared.
#[derive(Debug, Clone)]
pub struct UploadRelay {
    http: reqwest::Client,
    config: Option<CloudinaryConfig>,
}

impl UploadRelay {
    /// `config` is `None` when no credentials were provided; every upload
    /// then fails with `NotConfigured`.
    pub fn new(http: reqwest::Client, config: Option<CloudinaryConfig>) -> Self {
        Self { http, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Store `file` on the image host.
    ///
    /// # Errors
    ///
    /// * `UnsupportedFormat` - not a jpeg/jpg/png, checked before any request
    /// * `NotConfigured` - no credentials
    /// * `Upstream` - transport failure or a non-2xx answer from the host
    pub async fn store(&self, file: UploadedFile) -> Result<StoredImage, UploadError> {
        check_format(&file)?;
        let config = self.config.as_ref().ok_or(UploadError::NotConfigured)?;

        let params = [
            ("allowed_formats", ALLOWED_FORMATS.join(",")),
            ("folder", config.folder.clone()),
            ("timestamp", Utc::now().timestamp().to_string()),
        ];
        let signature = sign(&params, &config.api_secret);

        let file_name = file.file_name.clone();
        let mut form = Form::new()
            .part("file", Part::bytes(file.bytes.to_vec()).file_name(file.file_name))
            .text("api_key", config.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256");
        for (key, value) in params {
            form = form.text(key, value);
        }

        let url = format!(
            "{}/v1_1/{}/image/upload",
            config.api_base.trim_end_matches('/'),
            config.cloud_name
        );
        tracing::debug!(%url, %file_name, "Uploading image");

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Upstream {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<HostErrorBody>().await {
                Ok(body) => body.error.message,
                Err(_) => format!("image host answered {status}"),
            };
            return Err(UploadError::Upstream { message });
        }

        let stored: StoredImage = response.json().await.map_err(|e| UploadError::Upstream {
            message: format!("unreadable upload response: {e}"),
        })?;

        tracing::info!(public_id = %stored.public_id, "Image stored");
        Ok(stored)
    }
}
