//! Upstream polling client.
//!
//! The game server owns the simulation; this service only mirrors its
//! admin data. [`UpstreamClient`] fetches `/api/admin/history` and
//! `/api/admin/events` over HTTP, and [`run_poller`] swaps the results
//! into [`AppState`] on a fixed interval. A failed poll keeps the
//! previous snapshot so the dashboard degrades to stale data instead of
//! no data.

use std::sync::Arc;
use std::time::Duration;

use holdfast_types::{DailySnapshot, EventCatalog};
use tracing::{info, warn};

use crate::state::AppState;

/// Errors that can occur while polling the game server.
#[derive(Debug, thiserror::Error)]
pub enum PollerError {
    /// The HTTP request failed or returned a non-success status.
    #[error("upstream request error: {0}")]
    Upstream(String),

    /// The response body could not be decoded into the expected shape.
    #[error("upstream decode error: {0}")]
    Decode(String),
}

/// HTTP client for the game server's admin API.
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
    admin_token: Option<String>,
}

impl UpstreamClient {
    /// Create a client for the given base URL (no trailing slash),
    /// optionally attaching a bearer token to every request.
    pub fn new(base_url: String, admin_token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            admin_token,
        }
    }

    /// Fetch the full daily history.
    pub async fn fetch_history(&self) -> Result<Vec<DailySnapshot>, PollerError> {
        self.get_json("/api/admin/history").await
    }

    /// Fetch the event catalog.
    pub async fn fetch_catalog(&self) -> Result<EventCatalog, PollerError> {
        self.get_json("/api/admin/events").await
    }

    /// Issue a GET request and decode the JSON response body.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, PollerError> {
        let url = format!("{}{path}", self.base_url);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.admin_token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| PollerError::Upstream(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(PollerError::Upstream(format!(
                "{url} returned {status}: {error_body}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| PollerError::Decode(format!("{url} response decode failed: {e}")))
    }
}

/// Poll the game server forever, replacing the shared snapshot after
/// each successful round trip.
///
/// Both endpoints must succeed before the snapshot is replaced; a
/// partial refresh would let the drift and catalog views disagree about
/// which day they describe.
pub async fn run_poller(client: UpstreamClient, state: Arc<AppState>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let history = match client.fetch_history().await {
            Ok(history) => history,
            Err(e) => {
                warn!(error = %e, "history poll failed, keeping previous snapshot");
                continue;
            }
        };

        let catalog = match client.fetch_catalog().await {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(error = %e, "catalog poll failed, keeping previous snapshot");
                continue;
            }
        };

        let days = history.len();
        let events = catalog.total;
        state.replace(history, catalog).await;
        info!(days, events, "snapshot refreshed from upstream");
    }
}
