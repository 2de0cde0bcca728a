//! Plain HTTP layer: the static demo page and the health probe.
//!
//! These routes live on their own listener, separate from the WebSocket
//! port. `GET /` serves the configured HTML file from disk on every
//! request; nothing is cached, so edits to the file show up on reload.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::app_state::AppState;
use crate::error::ServerError;

/// `GET /` — Serve the static demo page.
///
/// # Errors
///
/// Returns [`ServerError::PageNotFound`] when the configured file does not
/// exist and [`ServerError::PageRead`] for any other read failure.
pub async fn page_handler(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    let path = &state.config.static_page_path;
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Ok(Html(contents)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "static page missing");
            Err(ServerError::PageNotFound(path.clone()))
        }
        Err(err) => Err(ServerError::PageRead(err)),
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
    active_sessions: usize,
}

/// `GET /health` — Service health status and open session count.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            active_sessions: state.sessions.len().await,
        }),
    )
}

/// Builds the router for the static page listener.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(page_handler))
        .route("/health", get(health_handler))
}
