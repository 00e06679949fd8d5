//! devhub - Content Backend
//!
//! A backend-for-frontend that stores three kinds of user content in a
//! document database and relays two kinds of work to external services:
//!
//! - **Code snippets** - code samples with language and uploader
//! - **Blogs** - long-form posts with a preview image, searchable by text
//! - **Chatrooms** - rooms with a participant list and a message log
//! - **Image uploads** - forwarded to Cloudinary
//! - **Code generation** - prompts forwarded to Gemini
//!
//! # Module Structure
//!
//! - **`shared`** - serializable document types, the response envelope and
//!   validation errors
//! - **`backend`** - the Axum server, persistence and relays
//!
//! # Usage
//!
//! ```rust,no_run
//! use devhub::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # User Snapshots
//!
//! Uploaders, participants and message senders are stored as copies of the
//! user fields sent with the request. They are not references and do not
//! follow later profile changes.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
