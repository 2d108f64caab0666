//! Skyops server - coordination backend for drone field operations.

use anyhow::Result;
use axum::routing::get;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skyops_server::api;
use skyops_server::config::Config;
use skyops_server::persistence;
use skyops_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("skyops_server=debug".parse()?),
        )
        .init();

    tracing::info!("Starting skyops server...");

    let config = Config::from_env();
    let port = config.server_port;

    let db =
        persistence::init_database(&config.database_path, config.database_max_connections).await?;
    let state = Arc::new(AppState::with_database(db, config));
    state.load_from_database().await?;

    // Build the app
    let app = api::routes()
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(CorsLayer::permissive());

    // Run server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
