//! Generation Relay
//!
//! A single passthrough to the hosted text generation API: a prompt goes
//! out, the generated text comes back. No retries, no streaming.
//!
//! - **`gemini`** - the HTTP client
//! - **`handlers`** - `POST /ai/code/generate`

pub mod gemini;
pub mod handlers;

use thiserror::Error;

pub use gemini::{GeminiConfig, GenerationRelay};

/// Generation failures
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The prompt was empty; nothing was sent upstream
    #[error("prompt is empty")]
    EmptyPrompt,

    /// No API key was configured
    #[error("text generation is not configured")]
    NotConfigured,

    /// The provider failed or answered with something unusable
    #[error("text generation failed: {message}")]
    Upstream { message: String },
}
