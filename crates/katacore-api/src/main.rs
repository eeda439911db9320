//! KataCore backend entry point.
//!
//! Reads the environment, starts the CORS-enabled listener and waits for a
//! shutdown signal. Any startup failure is logged and the process exits with
//! status 1.

use std::process::ExitCode;

use katacore_api::config::ApiConfig;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let config = ApiConfig::from_env();

    let log_level = config
        .as_ref()
        .map_or("info", |c| c.log_level.as_str())
        .to_owned();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .json()
        .init();

    let result = match config {
        Ok(config) => katacore_api::run(config).await,
        Err(e) => Err(anyhow::Error::new(e).context("invalid configuration")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "failed to start the application");
            ExitCode::FAILURE
        }
    }
}
