//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are handled
//! by each bounded context.

mod config;
mod static_files;

use std::sync::Arc;

use anyhow::Context;
use auth::{PgUserRepository, auth_router};
use axum::Router;
use journal::domain::repository::JournalLedger;
use journal::{FsBlobStore, JsonFileLedger, journal_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,journal=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()
        .inspect_err(|e| tracing::error!(error = %e, "Invalid configuration"))?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Failed to connect to database"))
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Journal storage
    let journal_config = config.journal_config();
    let blobs = Arc::new(FsBlobStore::open(&journal_config.content_root).await?);
    let ledger = Arc::new(JsonFileLedger::open(journal_config.ledger_path()).await?);

    // An unreadable ledger must not prevent startup; publishing reports it per request
    match ledger.entries().await {
        Ok(entries) => {
            tracing::info!(
                entries = entries.len(),
                path = %ledger.path().display(),
                "Journal ledger loaded"
            );
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                path = %ledger.path().display(),
                "Journal ledger unreadable, continuing anyway"
            );
        }
    }

    // Build router
    let app = Router::new()
        .merge(auth_router(
            PgUserRepository::new(pool.clone()),
            config.auth_config(),
        ))
        .merge(journal_router(ledger, blobs, &journal_config))
        .merge(static_files::router(&journal_config.content_root))
        .layer(TraceLayer::new_for_http());

    // Start server
    tracing::info!(
        content_root = %journal_config.content_root.display(),
        "Listening on {}",
        config.http_addr
    );

    let listener = TcpListener::bind(config.http_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to register SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
