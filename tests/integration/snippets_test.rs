//! Snippet API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use devhub::shared::CodeSnippet;

use crate::common::{data, snippet_body, test_server, Upstreams};

async fn store(server: &axum_test::TestServer, user_id: &str, code: &str) -> CodeSnippet {
    let response = server.post("/store/code").json(&snippet_body(user_id, code)).await;
    response.assert_status(StatusCode::CREATED);
    data(response.json())
}

#[tokio::test]
async fn test_store_and_get_by_id() {
    let server = test_server(Upstreams::default());
    let created = store(&server, "u1", "fn main() {}").await;

    assert_eq!(created.language, "rust");
    assert_eq!(created.uploaded_by.user_email, "u1@example.com");

    let response = server.post("/get/code").json(&json!({ "id": created.id })).await;
    response.assert_status_ok();
    let fetched: CodeSnippet = data(response.json());
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_missing_code_writes_nothing() {
    let server = test_server(Upstreams::default());
    let mut body = snippet_body("u1", "x");
    body.as_object_mut().unwrap().remove("code");

    let response = server.post("/store/code").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(error["ok"], false);
    assert_eq!(error["kind"], "validation");
    assert_eq!(error["message"], "Missing required field 'code'");

    let all: Vec<CodeSnippet> = data(server.get("/get/codes").await.json());
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_blank_email_is_missing() {
    let server = test_server(Upstreams::default());
    let mut body = snippet_body("u1", "x");
    body["user_email"] = json!("   ");

    let response = server.post("/store/code").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(error["message"], "Missing required field 'user_email'");
}

#[tokio::test]
async fn test_get_unknown_id() {
    let server = test_server(Upstreams::default());
    let response = server.post("/get/code").json(&json!({ "id": "no-such-id" })).await;

    response.assert_status(StatusCode::NOT_FOUND);
    let error: Value = response.json();
    assert_eq!(error["kind"], "not_found");
    assert_eq!(error["message"], "Snippet not found");
}

#[tokio::test]
async fn test_list_user_snippets_filters_by_owner() {
    let server = test_server(Upstreams::default());
    let mine_a = store(&server, "alice", "a").await;
    store(&server, "bob", "b").await;
    let mine_b = store(&server, "alice", "c").await;

    let response = server.post("/get/user/snippets").json(&json!({ "id": "alice" })).await;
    response.assert_status_ok();
    let mine: Vec<CodeSnippet> = data(response.json());
    assert_eq!(mine, vec![mine_a, mine_b]);

    let all: Vec<CodeSnippet> = data(server.get("/get/codes").await.json());
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let server = test_server(Upstreams::default());
    let created = store(&server, "u1", "old").await;

    let mut body = snippet_body("u2", "new");
    body["id"] = json!(created.id);
    body.as_object_mut().unwrap().remove("language");
    body.as_object_mut().unwrap().remove("description");

    let response = server.put("/update/code").json(&body).await;
    response.assert_status_ok();
    let updated: CodeSnippet = data(response.json());

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.code, "new");
    assert_eq!(updated.description, None);
    assert_eq!(updated.language, "rust");
    assert_eq!(updated.uploaded_by.user_id, "u2");
    assert!(updated.uploaded_at >= created.uploaded_at);
}

#[tokio::test]
async fn test_update_unknown_id_leaves_others() {
    let server = test_server(Upstreams::default());
    let kept = store(&server, "u1", "keep me").await;

    let mut body = snippet_body("u1", "changed");
    body["id"] = json!("missing");
    let response = server.put("/update/code").json(&body).await;
    response.assert_status(StatusCode::NOT_FOUND);

    let all: Vec<CodeSnippet> = data(server.get("/get/codes").await.json());
    assert_eq!(all, vec![kept]);
}

#[tokio::test]
async fn test_delete_twice() {
    let server = test_server(Upstreams::default());
    let created = store(&server, "u1", "bye").await;

    let first = server.post("/snippet/delete").json(&json!({ "id": created.id })).await;
    first.assert_status_ok();
    let deleted: CodeSnippet = data(first.json());
    assert_eq!(deleted.id, created.id);

    let second = server.post("/snippet/delete").json(&json!({ "id": created.id })).await;
    second.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_json_gets_envelope() {
    let server = test_server(Upstreams::default());
    let response = server
        .post("/store/code")
        .content_type("application/json")
        .bytes("{not json".into())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(error["ok"], false);
    assert_eq!(error["kind"], "validation");
}
