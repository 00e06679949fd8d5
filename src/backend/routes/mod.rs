//! Route Configuration Module
//!
//! HTTP routes of the backend, grouped by area.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports and documentation
//! ├── router.rs      - Router assembly, middleware, health and fallback
//! ├── api_routes.rs  - Snippets, blogs and code generation
//! └── chat_routes.rs - Chatrooms
//! ```
//!
//! # Responses
//!
//! Every route answers with the shared envelope, `{"ok": true, "data": ...}`
//! on success and `{"ok": false, "kind": ..., "message": ...}` on failure.
//! Unknown paths get a 404 in the same shape.

/// Main router creation
pub mod router;

/// Chatroom routes
pub mod chat_routes;

/// Snippet, blog and generation routes
pub mod api_routes;

// Re-export commonly used functions
pub use router::{create_router, HealthStatus};
