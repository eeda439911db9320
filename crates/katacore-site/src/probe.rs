//! API connectivity probe.
//!
//! A manual smoke test of the backend: `GET /` then `GET /health`, one after
//! the other. Whatever was captured last is what the page shows; on any
//! failure that is the error message. No retries, no timeout.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Prefix of the text shown when the backend cannot be reached.
pub const ERROR_PREFIX: &str = "Error connecting to API: ";

/// Health payload as reported by the backend, or the failure marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthStatus {
    fn failed() -> Self {
        Self {
            error: Some("Failed to connect".to_owned()),
            ..Self::default()
        }
    }
}

/// Outcome of one probe run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    /// Body of `GET /`, or the error text.
    pub api_response: String,
    /// Body of `GET /health`, or the failure marker.
    pub health: Option<HealthStatus>,
}

impl ProbeReport {
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.api_response.starts_with(ERROR_PREFIX)
    }
}

#[derive(Debug, thiserror::Error)]
enum ProbeError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

/// Client for the backend's two diagnostic endpoints.
#[derive(Debug, Clone)]
pub struct ApiProbe {
    client: reqwest::Client,
    base_url: String,
}

impl ApiProbe {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { client, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call `GET /` then `GET /health` and report what was captured.
    pub async fn run(&self) -> ProbeReport {
        let mut report = ProbeReport::default();
        match self.fetch(&mut report).await {
            Ok(()) => {
                debug!(base_url = %self.base_url, "API probe succeeded");
                report
            }
            Err(e) => {
                warn!(base_url = %self.base_url, error = %e, "API probe failed");
                ProbeReport {
                    api_response: format!("{ERROR_PREFIX}{e}"),
                    health: Some(HealthStatus::failed()),
                }
            }
        }
    }

    async fn fetch(&self, report: &mut ProbeReport) -> Result<(), ProbeError> {
        let root = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await?;
        report.api_response = root.text().await?;

        let health = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        report.health = Some(health.json::<HealthStatus>().await?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        assert_eq!(ApiProbe::new("http://localhost:3001/").base_url(), "http://localhost:3001");
    }

    #[test]
    fn failure_marker_serializes_only_error() {
        let json = serde_json::to_string(&HealthStatus::failed()).unwrap_or_default();
        assert_eq!(json, r#"{"error":"Failed to connect"}"#);
    }

    #[tokio::test]
    async fn unreachable_backend_reports_prefixed_error() {
        // Port 1 on loopback refuses connections.
        let report = ApiProbe::new("http://127.0.0.1:1").run().await;
        assert!(report.is_error());
        assert!(report.api_response.starts_with("Error connecting to API: "));
        assert_eq!(report.health, Some(HealthStatus::failed()));
    }
}
