//! Admin balance API server for the Holdfast voting game.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Cached upstream data** (`/api/admin/history`, `/api/admin/events`)
//!   mirrored from the game server by a background poller
//! - **Derived balance analytics** (`/api/admin/balance/*`): stat drift,
//!   event category mix, and per-category design balance, computed on
//!   demand by [`holdfast_analytics`]
//! - **Minimal HTML status page** (`GET /`) showing snapshot freshness
//!   and links to API endpoints
//!
//! # Architecture
//!
//! The observer reads from an in-memory [`GameSnapshot`] that the
//! upstream poller replaces wholesale after each successful fetch.
//! Analytics hold no state of their own, so a request always reflects
//! exactly one coherent snapshot: pull snapshot, recompute, respond.
//!
//! [`GameSnapshot`]: state::GameSnapshot

pub mod error;
pub mod handlers;
pub mod poller;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use poller::{PollerError, UpstreamClient, run_poller};
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::{AppState, GameSnapshot};
