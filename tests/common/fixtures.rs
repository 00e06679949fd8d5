//! Application fixtures
//!
//! Every test gets its own router over fresh in-memory collections, so tests
//! never share documents.

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use devhub::backend::generation::{GeminiConfig, GenerationRelay};
use devhub::backend::routes::create_router;
use devhub::backend::server::AppState;
use devhub::backend::uploads::{CloudinaryConfig, UploadRelay};
use devhub::shared::ApiResponse;

pub const TEST_CLOUD: &str = "demo-cloud";
pub const TEST_GEMINI_KEY: &str = "test-gemini-key";
pub const TEST_MODEL: &str = "gemini-2.0-flash";

/// Upstream endpoints for a test app. `None` leaves the relay unconfigured.
#[derive(Default)]
pub struct Upstreams {
    pub cloudinary: Option<String>,
    pub gemini: Option<String>,
}

pub fn cloudinary_config(api_base: &str) -> CloudinaryConfig {
    CloudinaryConfig {
        cloud_name: TEST_CLOUD.to_string(),
        api_key: "123456".to_string(),
        api_secret: "cloud-secret".to_string(),
        api_base: api_base.to_string(),
        folder: "CloudinaryDemo".to_string(),
    }
}

pub fn gemini_config(api_base: &str) -> GeminiConfig {
    GeminiConfig {
        api_key: TEST_GEMINI_KEY.to_string(),
        api_base: api_base.to_string(),
        model: TEST_MODEL.to_string(),
    }
}

/// Test server over empty in-memory collections
pub fn test_server(upstreams: Upstreams) -> TestServer {
    let http = reqwest::Client::new();
    let uploads = UploadRelay::new(
        http.clone(),
        upstreams.cloudinary.as_deref().map(cloudinary_config),
    );
    let generation = GenerationRelay::new(http, upstreams.gemini.as_deref().map(gemini_config));

    let app = create_router(AppState::in_memory(uploads, generation));
    TestServer::new(app).unwrap()
}

/// Decode a success envelope and return its data
pub fn data<T: DeserializeOwned>(body: Value) -> T {
    let response: ApiResponse<T> = serde_json::from_value(body).unwrap();
    response.into_data().expect("expected a success envelope")
}

pub fn user_fields(user_id: &str) -> Value {
    json!({
        "user_id": user_id,
        "user_email": format!("{user_id}@example.com"),
        "user_image": format!("https://img.example.com/{user_id}.png"),
    })
}

/// JSON body for `POST /store/code`
pub fn snippet_body(user_id: &str, code: &str) -> Value {
    let mut body = user_fields(user_id);
    body["code"] = json!(code);
    body["description"] = json!("A small example");
    body["language"] = json!("rust");
    body
}

pub fn png_part(file_name: &str) -> Part {
    Part::bytes(b"fake-png-bytes".to_vec())
        .file_name(file_name.to_string())
        .mime_type("image/png")
}

fn with_user(form: MultipartForm, user_id: &str) -> MultipartForm {
    form.add_text("user_id", user_id.to_string())
        .add_text("user_email", format!("{user_id}@example.com"))
}

/// Text fields of a blog multipart body, without the file
pub fn blog_form(user_id: &str, title: &str) -> MultipartForm {
    let form = MultipartForm::new()
        .add_text("title", title.to_string())
        .add_text("content", "Borrowing rules explained.")
        .add_text("excerpt", "A tour of the borrow checker")
        .add_text("reading_time", "6")
        .add_text("tags", "rust, ownership")
        .add_text("patreon", "https://patreon.com/example");
    with_user(form, user_id)
}

/// Text fields of a chatroom multipart body, without the file
pub fn chatroom_form(user_id: &str, name: &str) -> MultipartForm {
    let form = MultipartForm::new()
        .add_text("name", name.to_string())
        .add_text("description", "Talk about anything");
    with_user(form, user_id)
}
