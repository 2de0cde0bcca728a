//! Domain layer: session identity and the session registry.
//!
//! A session is one established WebSocket connection. The registry tracks
//! open sessions so connect/disconnect logging can report an online count;
//! sessions never communicate with each other through it.

pub mod session_id;
pub mod session_registry;

pub use session_id::SessionId;
pub use session_registry::{SessionInfo, SessionRegistry};
