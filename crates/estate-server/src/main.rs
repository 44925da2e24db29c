//! Estate Server - estates, trees and drone sweep plans over REST

use anyhow::{Context, Result};
use axum::routing::get;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use estate_server::{api, config::Config, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(config.log_json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!config.log_json).then(tracing_subscriber::fmt::layer))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("estate_server=debug".parse()?))
        .init();

    tracing::info!("Starting Estate Server...");

    let addr = SocketAddr::new(config.bind_addr, config.server_port);
    let state = Arc::new(AppState::new(config));

    let app = api::routes()
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
