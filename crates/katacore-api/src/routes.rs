//! Backend routes.

use axum::Json;
use axum::Router;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use serde::Serialize;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "katacore-api";

/// Build the route table (without middleware).
pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

async fn root() -> &'static str {
    "Hello World!"
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// RFC 3339 time the check was answered.
    pub timestamp: String,
    pub service: &'static str,
}

async fn health() -> impl IntoResponse {
    let body = HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().to_rfc3339(),
        service: SERVICE_NAME,
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
