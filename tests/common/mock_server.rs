//! Mock upstream servers for integration tests
//!
//! `wiremock` servers that answer like the image host and the generation
//! API. Expectations set with `expect` are verified when the server drops.

use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fixtures::{TEST_CLOUD, TEST_GEMINI_KEY, TEST_MODEL};

pub fn upload_path() -> String {
    format!("/v1_1/{TEST_CLOUD}/image/upload")
}

pub fn generate_path() -> String {
    format!("/v1beta/models/{TEST_MODEL}:generateContent")
}

/// Image host that stores every upload and answers with `secure_url`
pub async fn mock_cloudinary(secure_url: &str, expected_calls: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(upload_path()))
        .and(body_string_contains("signature_algorithm"))
        .and(body_string_contains("CloudinaryDemo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "public_id": "CloudinaryDemo/abc123",
            "secure_url": secure_url,
            "format": "png",
        })))
        .expect(expected_calls)
        .mount(&server)
        .await;
    server
}

/// Image host that rejects every upload
pub async fn mock_cloudinary_failure(status: u16, message: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(upload_path()))
        .respond_with(
            ResponseTemplate::new(status).set_body_json(json!({ "error": { "message": message } })),
        )
        .expect(1)
        .mount(&server)
        .await;
    server
}

/// Generation API answering `prompt` with `parts`
pub async fn mock_gemini(prompt: &str, parts: &[&str], expected_calls: u64) -> MockServer {
    let server = MockServer::start().await;
    let parts: Vec<_> = parts.iter().map(|text| json!({ "text": text })).collect();
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .and(header("x-goog-api-key", TEST_GEMINI_KEY))
        .and(body_partial_json(json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": parts, "role": "model" } }]
        })))
        .expect(expected_calls)
        .mount(&server)
        .await;
    server
}

/// Generation API that fails every request
pub async fn mock_gemini_failure(status: u16, message: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "error": { "code": status, "message": message, "status": "INVALID_ARGUMENT" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    server
}

/// A server that must never be called
pub async fn mock_untouched() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    server
}
