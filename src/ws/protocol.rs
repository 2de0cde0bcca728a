//! Wire literals exchanged over the WebSocket endpoint.
//!
//! The protocol is deliberately trivial: a fixed greeting on connect and a
//! fixed acknowledgment for every inbound message. Payloads are opaque;
//! inbound content never influences outbound content.

/// Text sent to every client exactly once, immediately after the upgrade
/// completes and before any client message is processed.
pub const GREETING: &str = "world";

/// Text sent in response to every inbound client message.
pub const REPLY: &str = "server: reply";
