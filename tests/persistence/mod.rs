//! Repository contract tests
//!
//! Every check is written once against the repository traits and run for
//! both adapters, so the MongoDB store is held to the behaviour the handlers
//! are tested with in memory.

pub mod store_contract_test;
