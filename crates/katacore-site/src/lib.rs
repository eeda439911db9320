//! InnerBright marketing website.
//!
//! Server-rendered pages over the data in `katacore-core`: the company
//! story, service pages, a session-gated dashboard, a placeholder admin
//! panel and a probe page that checks the backend is reachable.

pub mod components;
pub mod config;
pub mod error;
pub mod html;
pub mod layout;
pub mod probe;
pub mod router;
pub mod routes;
pub mod state;

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

pub use router::build_router;

use crate::state::AppState;

/// Bind the configured address and serve until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run(config: config::SiteServerConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    serve(listener, state).await
}

/// Serve on an already bound listener until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if the server fails.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = listener.local_addr().context("listener has no local address")?;
    let api_url = state.probe.base_url().to_owned();
    let app = build_router(state);

    info!(%addr, %api_url, "website is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(katacore_core::shutdown::shutdown_signal())
        .await
        .context("server error")?;

    info!("website stopped");
    Ok(())
}
