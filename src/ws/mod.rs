//! WebSocket layer: upgrade handling and the per-session loop.
//!
//! The WebSocket endpoint at `GET /` upgrades each incoming request and
//! runs one independent session task per accepted connection.

pub mod handler;
pub mod protocol;
pub mod session;

use axum::Router;
use axum::routing::get;

use crate::app_state::AppState;

/// Builds the router for the WebSocket listener.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(handler::ws_handler))
}
