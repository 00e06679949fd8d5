/**
 * Text Generation Client
 *
 * Calls the `generateContent` method of the Gemini REST API:
 *
 * ```http
 * POST {api_base}/v1beta/models/{model}:generateContent
 * x-goog-api-key: {api_key}
 *
 * {"contents":[{"parts":[{"text":"..."}]}]}
 * ```
 *
 * The text of the first candidate's parts, concatenated, is the result.
 */

use serde::{Deserialize, Serialize};

use super::GenerationError;

/// Default REST endpoint of the provider
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Provider credentials and model choice
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    error: ProviderError,
}

#[derive(Deserialize)]
struct ProviderError {
    message: String,
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        let parts = self.candidates.into_iter().next()?.content?.parts;
        let text: String = parts.into_iter().filter_map(|part| part.text).collect();
        (!text.is_empty()).then_some(text)
    }
}

/// Relay from prompts to the generation API
#[derive(Debug, Clone)]
pub struct GenerationRelay {
    http: reqwest::Client,
    config: Option<GeminiConfig>,
}

impl GenerationRelay {
    pub fn new(http: reqwest::Client, config: Option<GeminiConfig>) -> Self {
        Self { http, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Generate text for `prompt`.
    ///
    /// An empty or whitespace-only prompt fails with `EmptyPrompt` before
    /// the configuration is even looked at.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        if prompt.trim().is_empty() {
            return Err(GenerationError::EmptyPrompt);
        }
        let config = self.config.as_ref().ok_or(GenerationError::NotConfigured)?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            config.api_base.trim_end_matches('/'),
            config.model
        );
        let body = GenerateRequest {
            contents: [Content {
                parts: [RequestPart { text: prompt }],
            }],
        };

        tracing::debug!(model = %config.model, prompt_len = prompt.len(), "Requesting generation");
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Upstream {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ProviderErrorBody>().await {
                Ok(body) => body.error.message,
                Err(_) => format!("provider answered {status}"),
            };
            return Err(GenerationError::Upstream { message });
        }

        let generated: GenerateResponse =
            response.json().await.map_err(|e| GenerationError::Upstream {
                message: format!("unreadable generation response: {e}"),
            })?;

        generated.into_text().ok_or_else(|| GenerationError::Upstream {
            message: "response contained no text".to_string(),
        })
    }
}
