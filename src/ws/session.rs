//! Per-connection WebSocket session loop.
//!
//! Runs the read/write loop for a single connection: sends the greeting,
//! answers every inbound message with the fixed reply, logs pongs, and
//! optionally sends periodic keepalive pings.

use std::net::SocketAddr;

use axum::body::Bytes;
use axum::extract::ws::{Message, WebSocket};
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use tokio::time::Interval;

use super::protocol::{GREETING, REPLY};
use crate::app_state::AppState;
use crate::domain::{SessionId, SessionInfo};

/// Runs one WebSocket session to completion.
///
/// The session ends when the peer closes, the transport errors, or a send
/// fails. Each inbound event is handled independently; no state carries
/// over between messages.
pub async fn run_session(socket: WebSocket, peer_addr: Option<SocketAddr>, state: AppState) {
    let id = SessionId::new();
    let online = state
        .sessions
        .register(id, SessionInfo::new(peer_addr))
        .await;
    tracing::info!(session = %id, peer = ?peer_addr, online, "client connected");

    let (ws_tx, ws_rx) = socket.split();
    run_loop(ws_tx, ws_rx, id, &state).await;

    let online = state.sessions.deregister(id).await;
    tracing::info!(session = %id, online, "client disconnected");
}

/// Greeting send plus the event loop, separated so the caller always
/// deregisters the session on the way out.
async fn run_loop(
    mut ws_tx: SplitSink<WebSocket, Message>,
    mut ws_rx: SplitStream<WebSocket>,
    id: SessionId,
    state: &AppState,
) {
    // The greeting goes out before any client message is read.
    if ws_tx.send(Message::text(GREETING)).await.is_err() {
        return;
    }

    // First tick lands one full period after connect, not immediately.
    let mut keepalive = state
        .config
        .keepalive_interval()
        .map(|period| tokio::time::interval_at(tokio::time::Instant::now() + period, period));

    loop {
        tokio::select! {
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        tracing::info!(session = %id, payload = %text.as_str(), "received message");
                        if ws_tx.send(Message::text(REPLY)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Binary(bytes))) => {
                        // Payloads are opaque; binary gets the same fixed reply.
                        tracing::info!(session = %id, len = bytes.len(), "received binary message");
                        if ws_tx.send(Message::text(REPLY)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Pong(_))) => {
                        tracing::info!(session = %id, "received pong from client");
                    }
                    // axum answers pings with pongs on its own.
                    Some(Ok(Message::Ping(_))) => {}
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                }
            }
            () = keepalive_tick(&mut keepalive) => {
                tracing::debug!(session = %id, "sending keepalive ping");
                if ws_tx.send(Message::Ping(Bytes::new())).await.is_err() {
                    break;
                }
            }
        }
    }
}

/// Waits for the next keepalive tick, or forever when keepalive is off.
async fn keepalive_tick(interval: &mut Option<Interval>) {
    match interval {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}
