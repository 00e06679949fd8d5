/**
 * Application State
 *
 * `AppState` holds every process-scoped dependency the handlers use. All of
 * them are constructed once at startup and shared by cheap clones:
 *
 * - the three collections, as trait objects so the MongoDB and in-memory
 *   stores are interchangeable
 * - the image host relay
 * - the text generation relay
 *
 * # State Extraction
 *
 * The `FromRef` implementations let a handler ask for exactly the piece it
 * needs:
 *
 * ```rust,ignore
 * async fn handler(State(store): State<SnippetStore>) { /* ... */ }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::blogs::handlers::BlogStore;
use crate::backend::chatrooms::handlers::ChatroomStore;
use crate::backend::generation::GenerationRelay;
use crate::backend::persistence::{MemoryRepository, MongoStore};
use crate::backend::snippets::handlers::SnippetStore;
use crate::backend::uploads::UploadRelay;
use crate::shared::content::{Blog, Chatroom, CodeSnippet};

/// Shared state of the HTTP server
#[derive(Clone)]
pub struct AppState {
    /// Snippet collection
    pub snippets: SnippetStore,

    /// Blog collection
    pub blogs: BlogStore,

    /// Chatroom collection
    pub chatrooms: ChatroomStore,

    /// Relay to the image host, unconfigured when credentials are missing
    pub uploads: UploadRelay,

    /// Relay to the text generation API, unconfigured without an API key
    pub generation: GenerationRelay,
}

impl AppState {
    /// State backed by MongoDB collections
    pub fn with_mongo(store: &MongoStore, uploads: UploadRelay, generation: GenerationRelay) -> Self {
        Self {
            snippets: Arc::new(store.repository::<CodeSnippet>()),
            blogs: Arc::new(store.repository::<Blog>()),
            chatrooms: Arc::new(store.repository::<Chatroom>()),
            uploads,
            generation,
        }
    }

    /// State backed by empty in-memory collections
    pub fn in_memory(uploads: UploadRelay, generation: GenerationRelay) -> Self {
        Self {
            snippets: Arc::new(MemoryRepository::<CodeSnippet>::new()),
            blogs: Arc::new(MemoryRepository::<Blog>::new()),
            chatrooms: Arc::new(MemoryRepository::<Chatroom>::new()),
            uploads,
            generation,
        }
    }
}

impl FromRef<AppState> for SnippetStore {
    fn from_ref(app_state: &AppState) -> Self {
        Arc::clone(&app_state.snippets)
    }
}

impl FromRef<AppState> for BlogStore {
    fn from_ref(app_state: &AppState) -> Self {
        Arc::clone(&app_state.blogs)
    }
}

impl FromRef<AppState> for ChatroomStore {
    fn from_ref(app_state: &AppState) -> Self {
        Arc::clone(&app_state.chatrooms)
    }
}

impl FromRef<AppState> for UploadRelay {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.uploads.clone()
    }
}

impl FromRef<AppState> for GenerationRelay {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.generation.clone()
    }
}
