//! Event definition types.
//!
//! These mirror the payload of the game server's `GET /api/admin/events`
//! endpoint: two disjoint pools of event definitions (built-in templates
//! shipped with the game, and custom events created from the admin
//! dashboard) plus a combined total. Definitions describe what an event
//! *could* do; the history snapshots record what actually happened.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// StatDeltas
// ---------------------------------------------------------------------------

/// Signed stat changes applied when an event option wins the vote.
///
/// Unlike live world stats these have no fixed range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StatDeltas {
    /// Morale change.
    #[serde(default)]
    pub morale: i64,
    /// Supplies change.
    #[serde(default)]
    pub supplies: i64,
    /// Threat change.
    #[serde(default)]
    pub threat: i64,
}

// ---------------------------------------------------------------------------
// EventOption
// ---------------------------------------------------------------------------

/// One votable choice on an event definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EventOption {
    /// Stable option key referenced by votes and `chosen_option`.
    pub key: String,
    /// Short label shown on the vote button.
    pub label: String,
    /// Flavor text describing the consequence.
    #[serde(default)]
    pub description: Option<String>,
    /// Stat changes applied if this option wins.
    #[serde(default)]
    pub deltas: StatDeltas,
}

// ---------------------------------------------------------------------------
// EventDefinition
// ---------------------------------------------------------------------------

/// A narrative event template.
///
/// Every well-formed definition carries at least one option; a
/// zero-option definition is malformed but must not break analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EventDefinition {
    /// Upstream-assigned identifier (string for built-ins, stringified
    /// row ID for custom events).
    pub id: String,
    /// Headline shown to players.
    pub headline: String,
    /// Longer event description.
    #[serde(default)]
    pub description: Option<String>,
    /// Category name (`general`, `crisis`, `opportunity`, `narrative`, ...).
    pub category: String,
    /// Votable options.
    #[serde(default)]
    pub options: Vec<EventOption>,
    /// Whether this definition comes from the built-in pool.
    #[serde(default)]
    pub is_builtin: bool,
}

// ---------------------------------------------------------------------------
// EventCatalog
// ---------------------------------------------------------------------------

/// The full event catalog as served by `GET /api/admin/events`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EventCatalog {
    /// Built-in event templates shipped with the game.
    #[serde(default)]
    pub builtin: Vec<EventDefinition>,
    /// Custom events created from the admin dashboard.
    #[serde(default)]
    pub custom: Vec<EventDefinition>,
    /// Combined count as reported by the server.
    #[serde(default)]
    pub total: usize,
}
