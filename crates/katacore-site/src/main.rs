//! Website entry point.
//!
//! Reads the environment, loads the optional site metadata override,
//! prerenders the landing page and serves until a shutdown signal arrives.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use katacore_core::site::SiteConfig;
use katacore_site::config::SiteServerConfig;
use katacore_site::state::AppState;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let config = SiteServerConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    match start(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "failed to start the application");
            ExitCode::FAILURE
        }
    }
}

async fn start(config: SiteServerConfig) -> anyhow::Result<()> {
    let site = match &config.site_config_path {
        Some(path) => {
            let site = SiteConfig::from_json_file(path).context("failed to load site config")?;
            info!(path = %path, "site config loaded");
            site
        }
        None => SiteConfig::default(),
    };

    let state = Arc::new(AppState::new(&config, site));
    katacore_site::run(config, state).await
}
