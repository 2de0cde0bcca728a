//! echo-gateway server entry point.
//!
//! Starts two Axum listeners: the WebSocket echo endpoint and the static
//! page endpoint. Both shut down gracefully on ctrl-c.

use std::net::SocketAddr;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use echo_gateway::app_state::AppState;
use echo_gateway::config::ServerConfig;
use echo_gateway::{http, ws};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ServerConfig::from_env()?;
    tracing::info!(
        ws_addr = %config.ws_listen_addr,
        http_addr = %config.http_listen_addr,
        keepalive = config.keepalive_enabled,
        "starting echo-gateway"
    );

    // Build application state
    let state = AppState::new(config);

    // Build routers
    let ws_app = ws::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());
    let http_app = http::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    // Start both listeners
    let ws_listener = tokio::net::TcpListener::bind(state.config.ws_listen_addr).await?;
    tracing::info!(addr = %state.config.ws_listen_addr, "websocket listener ready");

    let http_listener = tokio::net::TcpListener::bind(state.config.http_listen_addr).await?;
    tracing::info!(addr = %state.config.http_listen_addr, "static page listener ready");

    let ws_server = axum::serve(
        ws_listener,
        ws_app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal());

    let http_server = axum::serve(http_listener, http_app.into_make_service())
        .with_graceful_shutdown(shutdown_signal());

    tokio::try_join!(async { ws_server.await }, async { http_server.await })?;

    tracing::info!("echo-gateway stopped");
    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to install ctrl-c handler");
    }
}
