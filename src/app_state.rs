//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::domain::SessionRegistry;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable server configuration loaded at startup.
    pub config: Arc<ServerConfig>,
    /// Registry of currently open WebSocket sessions.
    pub sessions: Arc<SessionRegistry>,
}

impl AppState {
    /// Builds the application state from a loaded configuration.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            sessions: Arc::new(SessionRegistry::new()),
        }
    }
}
