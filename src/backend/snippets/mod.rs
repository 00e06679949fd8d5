//! Code Snippets
//!
//! JSON-only CRUD over the `snippets` collection.
//!
//! - **`types`** - request bodies and their validation
//! - **`handlers`** - one handler per route

pub mod handlers;
pub mod types;

pub use handlers::{
    delete_snippet, get_snippet, list_snippets, list_user_snippets, store_snippet,
    update_snippet,
};
