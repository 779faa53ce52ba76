//! Service entry point for the Holdfast balance observer.
//!
//! Wires the pieces together: loads configuration from environment
//! variables, initializes structured logging, starts the upstream
//! poller when a game server URL is configured, and runs the admin
//! balance HTTP server until the process is terminated.

mod config;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use holdfast_observer::poller::{UpstreamClient, run_poller};
use holdfast_observer::server::{ServerConfig, start_server};
use holdfast_observer::state::AppState;

use crate::config::BalanceConfig;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the HTTP server
/// fails to bind or serve.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("holdfast-balance starting");

    let config = BalanceConfig::from_env()?;
    info!(
        host = config.host,
        port = config.port,
        poll_interval_secs = config.poll_interval.as_secs(),
        polling_enabled = config.upstream_api_url.is_some(),
        "configuration loaded"
    );

    let state = Arc::new(AppState::new());

    if let Some(upstream) = config.upstream_api_url.clone() {
        let client = UpstreamClient::new(upstream.clone(), config.admin_token.clone());
        let poller_state = Arc::clone(&state);
        let interval = config.poll_interval;
        tokio::spawn(async move {
            run_poller(client, poller_state, interval).await;
        });
        info!(upstream, "upstream poller started");
    } else {
        info!("UPSTREAM_API_URL not set, serving empty snapshot without polling");
    }

    let server_config = ServerConfig {
        host: config.host,
        port: config.port,
    };
    start_server(&server_config, state).await?;

    Ok(())
}
