/**
 * devhub Server Entry Point
 *
 * Loads `.env`, initializes tracing, reads the configuration and serves the
 * API on `0.0.0.0:$PORT`.
 */

use tracing_subscriber::EnvFilter;

use devhub::backend::server::{create_app, ServerConfig};

const DEFAULT_LOG_FILTER: &str = "info,devhub=debug";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = ServerConfig::from_env()?;
    let app = create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
