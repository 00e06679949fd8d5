//! Test suite for devhub
//!
//! - `common` - fixtures and mock upstream servers
//! - `integration` - the full router driven through `axum-test`
//! - `persistence` - the repository contract, run against both stores
//! - `property` - store invariants checked with `proptest`

pub mod integration;
pub mod persistence;
