//! Integration tests for the backend bootstrap: environment parsing, the
//! two endpoints, and the CORS policy.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::{HashMap, HashSet};

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, StatusCode, header};
use tower::ServiceExt;

use katacore_api::build_router;
use katacore_api::config::{ApiConfig, ConfigError};

/// Helper: build a config from a fixed set of variables.
fn config_from(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    ApiConfig::from_lookup(|key| vars.get(key).cloned())
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ── Configuration ────────────────────────────────────────────────────

#[test]
fn defaults_listen_on_3001_for_localhost_3000() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.bind_addr.port(), 3001);
    assert!(config.bind_addr.ip().is_unspecified());
    assert_eq!(config.cors_origins, vec!["http://localhost:3000"]);
    assert_eq!(config.log_level, "info");
}

#[test]
fn api_port_wins_over_port() {
    let config = config_from(&[("API_PORT", "4000"), ("PORT", "5000")]).unwrap();
    assert_eq!(config.bind_addr.port(), 4000);
}

#[test]
fn port_is_used_without_api_port() {
    let config = config_from(&[("PORT", "5000")]).unwrap();
    assert_eq!(config.bind_addr.port(), 5000);
}

#[test]
fn empty_api_port_falls_through_to_port() {
    let config = config_from(&[("API_PORT", ""), ("PORT", "5000")]).unwrap();
    assert_eq!(config.bind_addr.port(), 5000);
}

#[test]
fn cors_origins_are_split_and_trimmed() {
    let config = config_from(&[("CORS_ORIGIN", "http://a.com, http://b.com")]).unwrap();
    let origins: HashSet<&str> = config.cors_origins.iter().map(String::as_str).collect();
    assert_eq!(origins, HashSet::from(["http://a.com", "http://b.com"]));
    assert_eq!(config.cors_origins.len(), 2);
}

#[test]
fn non_numeric_port_is_rejected() {
    let err = config_from(&[("API_PORT", "abc")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { var: "API_PORT", .. }));
}

#[test]
fn origin_with_control_characters_is_rejected() {
    let err = config_from(&[("CORS_ORIGIN", "http://a.com,http://b\u{7}.com")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidOrigin { .. }));
}

// ── Endpoints ────────────────────────────────────────────────────────

#[tokio::test]
async fn root_says_hello() {
    let app = build_router(&config_from(&[]).unwrap());
    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Hello World!");
}

#[tokio::test]
async fn health_reports_ok_and_is_not_cached() {
    let app = build_router(&config_from(&[]).unwrap());
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "no-store, no-cache, must-revalidate"
    );

    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "katacore-api");
    assert!(chrono::DateTime::parse_from_rfc3339(json["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn unknown_path_is_404() {
    let app = build_router(&config_from(&[]).unwrap());
    let response = app
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ── CORS ─────────────────────────────────────────────────────────────

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/health")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn preflight_from_allowed_origin_allows_credentials() {
    let config = config_from(&[("CORS_ORIGIN", "http://a.com, http://b.com")]).unwrap();
    let response = build_router(&config)
        .oneshot(preflight("http://b.com"))
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "http://b.com");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn preflight_gets_requested_headers_mirrored() {
    let config = config_from(&[("CORS_ORIGIN", "http://a.com")]).unwrap();
    let mut request = preflight("http://a.com");
    request.headers_mut().insert(
        header::ACCESS_CONTROL_REQUEST_HEADERS,
        HeaderValue::from_static("x-custom-header,content-type"),
    );
    let response = build_router(&config).oneshot(request).await.unwrap();

    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "x-custom-header,content-type"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn preflight_from_other_origin_gets_no_allow_origin() {
    let config = config_from(&[("CORS_ORIGIN", "http://a.com")]).unwrap();
    let response = build_router(&config)
        .oneshot(preflight("http://evil.example"))
        .await
        .unwrap();

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn simple_request_echoes_allowed_origin() {
    let app = build_router(&config_from(&[]).unwrap());
    let response = app
        .oneshot(
            Request::get("/")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
}
