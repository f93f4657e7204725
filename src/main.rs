// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Token Studio page server
//!
//! Serves the signed-in user's profile page with token balance and saved
//! image gallery.

use std::sync::Arc;
use token_studio::{
    config::{Config, DataBackend},
    db::{FirestoreDb, MemoryDb, ProfileRepository},
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging for GCP
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, backend = ?config.data_backend, "Starting Token Studio");

    let repo: Arc<dyn ProfileRepository> = match config.data_backend {
        DataBackend::Firestore => Arc::new(FirestoreDb::new(&config.gcp_project_id).await?),
        DataBackend::Memory => {
            tracing::warn!("Using in-memory store; data is not persisted");
            Arc::new(MemoryDb::new())
        }
    };

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        repo,
    });

    // Build router
    let app = token_studio::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("token_studio=debug,info")),
        )
        .with(format)
        .init();
}
