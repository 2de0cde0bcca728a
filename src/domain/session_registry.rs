//! Concurrent store of open WebSocket sessions.
//!
//! [`SessionRegistry`] keeps one [`SessionInfo`] per open connection in a
//! `HashMap` behind a [`tokio::sync::RwLock`]. It exists so the server can
//! log an accurate online count on connect and disconnect and report the
//! count from the health endpoint; no message routing goes through it.

use std::collections::HashMap;
use std::net::SocketAddr;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::SessionId;

/// Metadata recorded for one open session.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    /// Remote peer address, when the transport exposes one.
    pub peer_addr: Option<SocketAddr>,
    /// Time the session was accepted.
    pub connected_at: DateTime<Utc>,
}

impl SessionInfo {
    /// Creates session metadata stamped with the current time.
    #[must_use]
    pub fn new(peer_addr: Option<SocketAddr>) -> Self {
        Self {
            peer_addr,
            connected_at: Utc::now(),
        }
    }
}

/// Central store for open sessions.
///
/// # Concurrency
///
/// Register and deregister take the write lock briefly; the count takes
/// the read lock. Sessions hold no lock while running.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<SessionId, SessionInfo>>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a newly accepted session and returns the new online count.
    pub async fn register(&self, id: SessionId, info: SessionInfo) -> usize {
        let mut map = self.sessions.write().await;
        map.insert(id, info);
        map.len()
    }

    /// Removes a closed session, returning the remaining online count.
    ///
    /// Removing an unknown ID is a no-op; the close path may run after a
    /// session that never finished registering.
    pub async fn deregister(&self, id: SessionId) -> usize {
        let mut map = self.sessions.write().await;
        map.remove(&id);
        map.len()
    }

    /// Returns the metadata for a session, if it is still open.
    pub async fn get(&self, id: SessionId) -> Option<SessionInfo> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Returns the number of open sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns `true` if no session is open.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn register_and_get() {
        let registry = SessionRegistry::new();
        let id = SessionId::new();

        let count = registry.register(id, SessionInfo::new(None)).await;
        assert_eq!(count, 1);

        let info = registry.get(id).await;
        assert!(info.is_some());
    }

    #[tokio::test]
    async fn deregister_removes_session() {
        let registry = SessionRegistry::new();
        let id = SessionId::new();

        let _ = registry.register(id, SessionInfo::new(None)).await;
        let remaining = registry.deregister(id).await;
        assert_eq!(remaining, 0);
        assert!(registry.get(id).await.is_none());
    }

    #[tokio::test]
    async fn deregister_unknown_is_noop() {
        let registry = SessionRegistry::new();
        let remaining = registry.deregister(SessionId::new()).await;
        assert_eq!(remaining, 0);
    }

    #[tokio::test]
    async fn count_tracks_registrations() {
        let registry = SessionRegistry::new();
        assert!(registry.is_empty().await);

        let a = SessionId::new();
        let b = SessionId::new();
        let _ = registry.register(a, SessionInfo::new(None)).await;
        let count = registry.register(b, SessionInfo::new(None)).await;
        assert_eq!(count, 2);
        assert_eq!(registry.len().await, 2);

        let _ = registry.deregister(a).await;
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn info_keeps_peer_addr() {
        let registry = SessionRegistry::new();
        let id = SessionId::new();
        let addr: SocketAddr = "127.0.0.1:4321".parse().ok().unwrap_or_else(|| {
            panic!("valid addr");
        });

        let _ = registry.register(id, SessionInfo::new(Some(addr))).await;
        let Some(info) = registry.get(id).await else {
            panic!("session missing");
        };
        assert_eq!(info.peer_addr, Some(addr));
    }
}
