//! Server configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). The only hard requirement is that a
//! listen address, when set, parses as a socket address.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Top-level server configuration.
///
/// Loaded once at startup via [`ServerConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address for the WebSocket listener (e.g. `0.0.0.0:8080`).
    pub ws_listen_addr: SocketAddr,

    /// Socket address for the static page listener (e.g. `0.0.0.0:3000`).
    pub http_listen_addr: SocketAddr,

    /// Path of the HTML file served at `GET /` on the HTTP listener.
    pub static_page_path: PathBuf,

    /// Whether the server sends periodic WebSocket pings to each client.
    pub keepalive_enabled: bool,

    /// Seconds between keepalive pings when enabled.
    pub keepalive_interval_secs: u64,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `WS_LISTEN_ADDR` or `HTTP_LISTEN_ADDR` is set
    /// but cannot be parsed as a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let ws_listen_addr: SocketAddr = std::env::var("WS_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()?;

        let http_listen_addr: SocketAddr = std::env::var("HTTP_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;

        let static_page_path = std::env::var("STATIC_PAGE_PATH")
            .unwrap_or_else(|_| "index.html".to_string())
            .into();

        let keepalive_enabled = parse_env_bool("KEEPALIVE_ENABLED", false);
        let keepalive_interval_secs = parse_env("KEEPALIVE_INTERVAL_SECS", 10);

        Ok(Self {
            ws_listen_addr,
            http_listen_addr,
            static_page_path,
            keepalive_enabled,
            keepalive_interval_secs,
        })
    }

    /// Returns the keepalive ping period, or `None` when keepalive is off.
    #[must_use]
    pub fn keepalive_interval(&self) -> Option<Duration> {
        self.keepalive_enabled
            .then(|| Duration::from_secs(self.keepalive_interval_secs))
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key).ok().as_deref() {
        Some("true") | Some("TRUE") | Some("1") => true,
        Some("false") | Some("FALSE") | Some("0") => false,
        _ => default,
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parse_env_falls_back_on_missing() {
        let value: u64 = parse_env("ECHO_GATEWAY_TEST_UNSET_VAR", 42);
        assert_eq!(value, 42);
    }

    #[test]
    fn parse_env_bool_falls_back_on_missing() {
        assert!(parse_env_bool("ECHO_GATEWAY_TEST_UNSET_BOOL", true));
        assert!(!parse_env_bool("ECHO_GATEWAY_TEST_UNSET_BOOL", false));
    }

    #[test]
    fn keepalive_interval_none_when_disabled() {
        let config = ServerConfig {
            ws_listen_addr: "127.0.0.1:8080".parse().ok().unwrap_or_else(|| {
                panic!("valid addr");
            }),
            http_listen_addr: "127.0.0.1:3000".parse().ok().unwrap_or_else(|| {
                panic!("valid addr");
            }),
            static_page_path: "index.html".into(),
            keepalive_enabled: false,
            keepalive_interval_secs: 10,
        };
        assert!(config.keepalive_interval().is_none());
    }

    #[test]
    fn keepalive_interval_some_when_enabled() {
        let config = ServerConfig {
            ws_listen_addr: "127.0.0.1:8080".parse().ok().unwrap_or_else(|| {
                panic!("valid addr");
            }),
            http_listen_addr: "127.0.0.1:3000".parse().ok().unwrap_or_else(|| {
                panic!("valid addr");
            }),
            static_page_path: "index.html".into(),
            keepalive_enabled: true,
            keepalive_interval_secs: 7,
        };
        assert_eq!(config.keepalive_interval(), Some(Duration::from_secs(7)));
    }
}
