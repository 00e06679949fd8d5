/**
 * Server Initialization
 *
 * Builds the application from a `ServerConfig`:
 *
 * 1. Create the shared HTTP client and both relays
 * 2. Connect to MongoDB when `ATLAS_URI` is configured, else use the
 *    in-memory store
 * 3. Ensure the indexes the queries rely on
 * 4. Assemble the router
 *
 * # Error Handling
 *
 * Missing image host or generation credentials only disable those routes.
 * A configured database that cannot be reached fails startup, since silently
 * falling back to memory would lose every write. Index creation failures are
 * logged and startup continues.
 */

use axum::Router;

use crate::backend::generation::GenerationRelay;
use crate::backend::persistence::{MongoStore, StoreError};
use crate::backend::routes::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::uploads::UploadRelay;

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing devhub backend server");

    let http = reqwest::Client::new();
    let uploads = UploadRelay::new(http.clone(), config.cloudinary.clone());
    let generation = GenerationRelay::new(http, config.gemini.clone());

    if !uploads.is_configured() {
        tracing::warn!("Image host credentials not set. Blog and chatroom uploads will answer 503.");
    }
    if !generation.is_configured() {
        tracing::warn!("GEMINI_API_KEY not set. Code generation will answer 503.");
    }

    let app_state = match &config.database {
        Some(database) => {
            tracing::info!("Connecting to MongoDB...");
            let store = MongoStore::connect(&database.uri, database.name.as_deref()).await?;
            if let Err(e) = store.ensure_indexes().await {
                tracing::warn!("Failed to create indexes, continuing without them: {}", e);
            }
            AppState::with_mongo(&store, uploads, generation)
        }
        None => {
            tracing::warn!("ATLAS_URI not set. Using the in-memory store; data is lost on restart.");
            AppState::in_memory(uploads, generation)
        }
    };

    let app = create_router(app_state);
    tracing::info!("Router configured");
    Ok(app)
}
