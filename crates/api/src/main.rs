// Eventbook API server
// Decision: Fail fast at startup; no degraded mode without a reachable, initialized database
// Decision: STORAGE_BACKEND=memory runs against the in-memory store for local development

use anyhow::{Context, Result};
use eventbook_api::app::build_router;
use eventbook_api::config::{AppConfig, StorageMode, LISTEN_ADDR};
use eventbook_api::storage::{Database, InMemoryDatabase};
use eventbook_api::EventService;
use eventbook_core::EventStore;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventbook_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("eventbook-api starting...");

    let config = AppConfig::from_env();

    // Initialize storage
    let store: Arc<dyn EventStore> = match config.storage {
        StorageMode::Postgres => {
            let db = Database::connect(&config.database)
                .await
                .with_context(|| {
                    format!(
                        "Failed to connect to database at {}",
                        config.database.display_target()
                    )
                })?;
            tracing::info!(database = %config.database.display_target(), "Connected to database");
            Arc::new(db)
        }
        StorageMode::Memory => {
            tracing::warn!("Using in-memory storage; events are lost on restart");
            Arc::new(InMemoryDatabase::new())
        }
    };

    store
        .ensure_schema()
        .await
        .context("Failed to initialize schema")?;
    tracing::info!("Database schema initialized");

    let service = Arc::new(EventService::new(store));

    tracing::info!(origins = ?config.cors.allowed_origins, "CORS origins configured");
    let app = build_router(service, &config.cors);

    // Start HTTP server
    let listener = tokio::net::TcpListener::bind(LISTEN_ADDR)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("HTTP server listening on {}", LISTEN_ADDR);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
