//! Backend configuration.
//!
//! Loaded from environment variables with literal defaults:
//! - `API_PORT`, then `PORT`: port to listen on (default `3001`), always on
//!   `0.0.0.0`
//! - `CORS_ORIGIN`: comma-separated allowed origins
//!   (default `http://localhost:3000`)
//! - `KATACORE_API_LOG_LEVEL`: log filter (default `info`)
//!
//! Empty variables count as unset.

use std::net::SocketAddr;

use axum::http::HeaderValue;

/// Port used when neither `API_PORT` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 3001;

/// Origin allowed when `CORS_ORIGIN` is not set.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Errors in the environment the backend was started with.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The port variable is not a valid TCP port.
    #[error("invalid port '{value}' in {var}: {reason}")]
    InvalidPort {
        var: &'static str,
        value: String,
        reason: String,
    },

    /// An origin cannot be sent in an `Access-Control-Allow-Origin` header.
    #[error("invalid CORS origin '{origin}'")]
    InvalidOrigin { origin: String },
}

/// Backend configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Origins allowed to make credentialed cross-origin requests.
    pub cors_origins: Vec<String>,
    /// Log level filter.
    pub log_level: String,
}

impl ApiConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`ApiConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through a variable lookup function.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if the port is not a number in
    /// range and [`ConfigError::InvalidOrigin`] if an origin contains
    /// characters that cannot appear in a header.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        // Priority: API_PORT > PORT > 3001
        let port = match (get("API_PORT"), get("PORT")) {
            (Some(value), _) => parse_port("API_PORT", &value)?,
            (None, Some(value)) => parse_port("PORT", &value)?,
            (None, None) => DEFAULT_PORT,
        };

        let raw_origins = get("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_owned());
        let cors_origins = parse_origins(&raw_origins);
        if let Some(bad) = cors_origins
            .iter()
            .find(|o| HeaderValue::from_str(o).is_err())
        {
            return Err(ConfigError::InvalidOrigin {
                origin: bad.clone(),
            });
        }

        let log_level = get("KATACORE_API_LOG_LEVEL").unwrap_or_else(|| "info".to_owned());

        Ok(Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], port)),
            cors_origins,
            log_level,
        })
    }
}

/// Split a comma-separated origin list, trimming whitespace around each
/// entry and dropping empty ones.
#[must_use]
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_owned)
        .collect()
}

fn parse_port(var: &'static str, value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidPort {
            var,
            value: value.to_owned(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_empty_origins() {
        assert_eq!(
            parse_origins(" http://a.com ,, http://b.com,"),
            vec!["http://a.com", "http://b.com"]
        );
    }

    #[test]
    fn single_origin_without_commas() {
        assert_eq!(parse_origins("http://localhost:3000"), vec!["http://localhost:3000"]);
    }

    #[test]
    fn port_parsing_reports_variable() {
        let err = parse_port("PORT", "eighty").err();
        assert!(matches!(err, Some(ConfigError::InvalidPort { var: "PORT", .. })));
        assert!(matches!(parse_port("PORT", "70000"), Err(ConfigError::InvalidPort { .. })));
        assert!(matches!(parse_port("PORT", " 8080 "), Ok(8080)));
    }
}
