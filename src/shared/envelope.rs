//! Response Envelope
//!
//! Every route answers with one of two JSON shapes:
//!
//! ```json
//! { "ok": true, "data": { ... } }
//! { "ok": false, "kind": "not_found", "message": "Snippet not found" }
//! ```
//!
//! The failure `kind` is a closed set so clients can branch on it without
//! parsing messages. Parsing goes by `ok`: a body whose fields disagree with
//! its `ok` flag is rejected rather than read as the other variant.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Category of a failed request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required field was missing or malformed
    Validation,
    /// The requested id does not resolve to a document
    NotFound,
    /// A document with the same id already exists
    Conflict,
    /// The image host rejected or failed the upload
    Upload,
    /// A third-party API failed
    Upstream,
    /// An external dependency is not configured
    Unavailable,
    /// Anything else, including database failures
    Internal,
}

/// Discriminated response body shared by all routes
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    /// Successful result
    Success {
        /// Always `true`
        ok: bool,
        /// Route-specific payload
        data: T,
    },
    /// Failed result
    Failure {
        /// Always `false`
        ok: bool,
        /// Failure category
        kind: ErrorKind,
        /// Client-safe description
        message: String,
    },
}

impl<T> ApiResponse<T> {
    /// Wrap a successful payload
    pub fn success(data: T) -> Self {
        Self::Success { ok: true, data }
    }

    /// Build a failure body
    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Failure {
            ok: false,
            kind,
            message: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Consume the envelope and return the payload of a success
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }
}

/// Wire form of either variant, before `ok` is checked
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct RawEnvelope<T> {
    ok: bool,
    #[serde(default, deserialize_with = "present")]
    data: Option<T>,
    kind: Option<ErrorKind>,
    message: Option<String>,
}

/// `Some` for any value present in the body, `null` included
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEnvelope::<T>::deserialize(deserializer)?;
        match raw {
            RawEnvelope {
                ok: true,
                data: Some(data),
                kind: None,
                message: None,
            } => Ok(Self::Success { ok: true, data }),
            RawEnvelope { ok: true, data: None, .. } => Err(de::Error::missing_field("data")),
            RawEnvelope { ok: true, .. } => Err(de::Error::custom(
                "success envelope carries failure fields",
            )),
            RawEnvelope {
                ok: false,
                data: None,
                kind: Some(kind),
                message: Some(message),
            } => Ok(Self::Failure {
                ok: false,
                kind,
                message,
            }),
            RawEnvelope { ok: false, data: Some(_), .. } => {
                Err(de::Error::custom("failure envelope carries data"))
            }
            RawEnvelope { kind: None, .. } => Err(de::Error::missing_field("kind")),
            RawEnvelope { .. } => Err(de::Error::missing_field("message")),
        }
    }
}
