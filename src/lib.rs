//! # echo-gateway
//!
//! A small WebSocket echo server with a companion static demo page.
//!
//! The service runs two listeners:
//!
//! - A WebSocket endpoint (default `0.0.0.0:8080`) that greets every new
//!   client with the literal text `world` and answers every inbound
//!   message with the literal text `server: reply`.
//! - A plain HTTP endpoint (default `0.0.0.0:3000`) that serves a single
//!   static HTML page at `GET /` plus a `/health` probe.
//!
//! ## Architecture
//!
//! ```text
//! Clients (WebSocket, HTTP)
//!     │
//!     ├── WS upgrade handler (ws/)
//!     │       └── one session task per connection
//!     ├── Static page + health (http/)
//!     │
//!     ├── SessionRegistry (domain/)
//!     └── ServerConfig (config)
//! ```
//!
//! Each session is handled in isolation: no shared mutable state exists
//! between connections beyond the [`domain::SessionRegistry`], which is
//! used only for the online count.

pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod ws;
