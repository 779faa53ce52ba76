//! Shared type definitions for the Holdfast world-balance service.
//!
//! This crate is the single source of truth for the wire types exchanged
//! with the game server's admin API. Types defined here flow downstream
//! to `TypeScript` via `ts-rs` for the admin dashboard.
//!
//! # Modules
//!
//! - [`world`] -- daily history snapshots (`GET /api/admin/history`)
//! - [`events`] -- event definitions and the catalog (`GET /api/admin/events`)

pub mod events;
pub mod world;

// Re-export all public types at crate root for convenience.
pub use events::{EventCatalog, EventDefinition, EventOption, StatDeltas};
pub use world::{DailySnapshot, SnapshotEvent, WorldStats};

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        let _ = crate::world::WorldStats::export_all();
        let _ = crate::world::SnapshotEvent::export_all();
        let _ = crate::world::DailySnapshot::export_all();
        let _ = crate::events::StatDeltas::export_all();
        let _ = crate::events::EventOption::export_all();
        let _ = crate::events::EventDefinition::export_all();
        let _ = crate::events::EventCatalog::export_all();
    }
}
