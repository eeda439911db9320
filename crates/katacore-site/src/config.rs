//! Website server configuration.
//!
//! Loads configuration from environment variables with sensible defaults.

use std::net::SocketAddr;

/// Default address when neither `KATACORE_BIND_ADDR` nor `PORT` is set.
const DEFAULT_BIND: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Session lifetime when `KATACORE_SESSION_TTL_HOURS` is unset or invalid.
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;
/// Longest accepted session lifetime: one year.
pub const MAX_SESSION_TTL_HOURS: i64 = 8760;

/// Website server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Base URL of the backend the connectivity probe calls.
    pub api_url: String,
    /// JSON file overriding the default site metadata.
    pub site_config_path: Option<String>,
    /// Lifetime of a login session, in hours.
    pub session_ttl_hours: i64,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
}

impl Default for SiteServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl SiteServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `KATACORE_BIND_ADDR`: full bind address (overrides `PORT`)
    /// - `PORT`: port to bind on all interfaces
    /// - `KATACORE_API_URL`: probe target (default: `http://localhost:3001`)
    /// - `KATACORE_SITE_CONFIG`: path to a JSON site metadata override
    /// - `KATACORE_SESSION_TTL_HOURS`: session lifetime, `1..=8760` (default: `24`)
    /// - `KATACORE_LOG_LEVEL`: log filter (default: `info`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through a variable lookup function.
    ///
    /// Unparseable values fall back to their defaults.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        // Priority: KATACORE_BIND_ADDR > PORT > default 127.0.0.1:3000
        let bind_addr = if let Some(addr) = get("KATACORE_BIND_ADDR") {
            addr.parse().unwrap_or_else(|_| SocketAddr::from(DEFAULT_BIND))
        } else if let Some(port) = get("PORT") {
            let port: u16 = port.trim().parse().unwrap_or(DEFAULT_BIND.1);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            SocketAddr::from(DEFAULT_BIND)
        };

        let api_url = get("KATACORE_API_URL")
            .unwrap_or_else(|| "http://localhost:3001".to_owned())
            .trim_end_matches('/')
            .to_owned();

        let session_ttl_hours = get("KATACORE_SESSION_TTL_HOURS")
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|h| (1..=MAX_SESSION_TTL_HOURS).contains(h))
            .unwrap_or(DEFAULT_SESSION_TTL_HOURS);

        Self {
            bind_addr,
            api_url,
            site_config_path: get("KATACORE_SITE_CONFIG"),
            session_ttl_hours,
            log_level: get("KATACORE_LOG_LEVEL").unwrap_or_else(|| "info".to_owned()),
        }
    }
}
