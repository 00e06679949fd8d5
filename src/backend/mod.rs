//! Backend Module
//!
//! All server-side code: the Axum HTTP server, the document store, and the
//! relays to the image host and the text generation API.
//!
//! # Architecture
//!
//! - **`server`** - configuration, application state, initialization
//! - **`routes`** - route tables and middleware
//! - **`snippets`**, **`blogs`**, **`chatrooms`** - request types and
//!   handlers per entity
//! - **`persistence`** - repository traits with MongoDB and in-memory adapters
//! - **`uploads`** - multipart reading and the image host relay
//! - **`generation`** - the text generation relay and its route
//! - **`extract`** - request extractors
//! - **`error`** - `BackendError` and its HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs
//! ├── main.rs        - devhub-server binary
//! ├── server/
//! ├── routes/
//! ├── snippets/
//! ├── blogs/
//! ├── chatrooms/
//! ├── persistence/
//! ├── uploads/
//! ├── generation/
//! ├── extract.rs
//! └── error/
//! ```
//!
//! # Dependencies
//!
//! Handlers never touch a global. Everything they use is constructed once in
//! [`server::create_app`] and reaches them through `AppState`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Request extractors
pub mod extract;

/// Document store
pub mod persistence;

/// Image upload relay
pub mod uploads;

/// Text generation relay
pub mod generation;

/// Code snippet routes
pub mod snippets;

/// Blog routes
pub mod blogs;

/// Chatroom routes
pub mod chatrooms;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
