//! KataCore backend.
//!
//! A small HTTP listener the website's connectivity probe talks to. It
//! answers `GET /` and `GET /health`, allows credentialed cross-origin
//! requests from the configured origins, and stops gracefully on
//! SIGINT/SIGTERM.

pub mod config;
pub mod routes;

use anyhow::Context;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ApiConfig;

/// CORS policy for the configured origins, with credentials allowed.
///
/// Preflights get back whichever request headers they ask for.
pub fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
}

/// Build the router with all routes and middleware.
pub fn build_router(config: &ApiConfig) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
}

/// Bind the configured address and serve until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run(config: ApiConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    serve(listener, &config).await
}

/// Serve on an already bound listener until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if the server fails.
pub async fn serve(listener: TcpListener, config: &ApiConfig) -> anyhow::Result<()> {
    let addr = listener.local_addr().context("listener has no local address")?;
    let app = build_router(config);

    info!(%addr, "API server is running");
    info!(origins = %config.cors_origins.join(", "), "CORS enabled");

    axum::serve(listener, app)
        .with_graceful_shutdown(katacore_core::shutdown::shutdown_signal())
        .await
        .context("server error")?;

    info!("API server stopped");
    Ok(())
}
