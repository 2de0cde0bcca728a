//! Axum WebSocket upgrade handler.

use std::net::SocketAddr;

use axum::extract::ws::WebSocketUpgrade;
use axum::extract::{ConnectInfo, State};
use axum::response::IntoResponse;

use super::session::run_session;
use crate::app_state::AppState;

/// `GET /` — Upgrade HTTP connection to WebSocket.
///
/// Malformed upgrade requests are rejected by axum before this handler's
/// callback runs; no custom handshake logic exists here.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    ConnectInfo(peer_addr): ConnectInfo<SocketAddr>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| run_session(socket, Some(peer_addr), state))
}
