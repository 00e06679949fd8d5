//! Router-level integration tests

use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};
use axum::http::{HeaderValue, StatusCode};
use serde_json::Value;

use devhub::backend::routes::HealthStatus;

use crate::common::{data, test_server, Upstreams};

#[tokio::test]
async fn test_health() {
    let server = test_server(Upstreams::default());

    let response = server.get("/health").await;
    response.assert_status_ok();
    let health: HealthStatus = data(response.json());
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_route() {
    let server = test_server(Upstreams::default());

    let response = server.get("/no/such/route").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let error: Value = response.json();
    assert_eq!(error["ok"], false);
    assert_eq!(error["kind"], "not_found");
}

#[tokio::test]
async fn test_cors_headers() {
    let server = test_server(Upstreams::default());

    let response = server
        .get("/get/codes")
        .add_header(ORIGIN, HeaderValue::from_static("http://localhost:3000"))
        .await;
    response.assert_status_ok();
    assert_eq!(response.header(ACCESS_CONTROL_ALLOW_ORIGIN), "*");
}
