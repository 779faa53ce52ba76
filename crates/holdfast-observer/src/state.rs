//! Shared application state for the admin balance API.
//!
//! [`AppState`] holds the in-memory [`GameSnapshot`] that every REST
//! endpoint reads from. The upstream poller replaces the snapshot
//! wholesale after each successful fetch; analytics are recomputed per
//! request from whatever snapshot is current, so there is no derived
//! state to invalidate.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use holdfast_types::{DailySnapshot, EventCatalog};
use tokio::sync::RwLock;

/// In-memory copy of the game server's admin data.
#[derive(Debug, Clone, Default)]
pub struct GameSnapshot {
    /// Daily history, oldest first, as delivered by `/api/admin/history`.
    pub history: Vec<DailySnapshot>,
    /// Event catalog as delivered by `/api/admin/events`.
    pub catalog: EventCatalog,
    /// When the snapshot was last refreshed from upstream.
    pub last_refresh: Option<DateTime<Utc>>,
}

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The
/// snapshot is a read-write lock: request handlers take short read
/// locks, the poller takes a write lock only to swap in fresh data.
#[derive(Clone, Default)]
pub struct AppState {
    /// The current game snapshot (replaced on every poll).
    pub snapshot: Arc<RwLock<GameSnapshot>>,
}

impl AppState {
    /// Create a new application state with an empty snapshot.
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(GameSnapshot::default())),
        }
    }

    /// Replace the snapshot with freshly fetched upstream data.
    pub async fn replace(&self, history: Vec<DailySnapshot>, catalog: EventCatalog) {
        let mut snapshot = self.snapshot.write().await;
        snapshot.history = history;
        snapshot.catalog = catalog;
        snapshot.last_refresh = Some(Utc::now());
    }
}
