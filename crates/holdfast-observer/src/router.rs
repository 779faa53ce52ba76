//! Axum router construction for the admin balance API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin dashboard access.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the balance observer.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET /api/admin/history` -- cached daily history
/// - `GET /api/admin/events` -- cached event catalog
/// - `GET /api/admin/balance/drift` -- stat drift summary
/// - `GET /api/admin/balance/mix` -- event category mix
/// - `GET /api/admin/balance/categories` -- design balance by category
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // Cached upstream data
        .route("/api/admin/history", get(handlers::get_history))
        .route("/api/admin/events", get(handlers::get_events))
        // Derived balance analytics
        .route("/api/admin/balance/drift", get(handlers::get_drift))
        .route("/api/admin/balance/mix", get(handlers::get_mix))
        .route(
            "/api/admin/balance/categories",
            get(handlers::get_categories),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
