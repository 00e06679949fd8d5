//! Integration tests
//!
//! Each test builds the complete router over in-memory collections and
//! drives it over HTTP with `axum-test`.

pub mod server_test;
pub mod snippets_test;
