//! Daily history snapshot types.
//!
//! These mirror the payload of the game server's `GET /api/admin/history`
//! endpoint field-for-field (`est_date`, nested `world` and `event`
//! objects, `chosen_option`, `tally`). The history is delivered ordered
//! oldest-first, one entry per simulated day, and entries are never
//! mutated after they are fetched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// WorldStats
// ---------------------------------------------------------------------------

/// The three tracked world statistics at the end of a simulated day.
///
/// The game server keeps each stat in the 0..=100 range; that invariant
/// is assumed, never enforced, on this side of the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WorldStats {
    /// Settlement morale.
    pub morale: i64,
    /// Stockpiled supplies.
    pub supplies: i64,
    /// External threat level.
    pub threat: i64,
}

// ---------------------------------------------------------------------------
// SnapshotEvent
// ---------------------------------------------------------------------------

/// The narrative event attached to a history entry.
///
/// Older history rows predate category tracking, so `category` is
/// optional even when the event itself is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SnapshotEvent {
    /// Event category name (`general`, `crisis`, `opportunity`, ...).
    #[serde(default)]
    pub category: Option<String>,
    /// Event headline shown to players that day.
    #[serde(default)]
    pub headline: Option<String>,
}

// ---------------------------------------------------------------------------
// DailySnapshot
// ---------------------------------------------------------------------------

/// One simulated day as reported by the admin history endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DailySnapshot {
    /// Simulated calendar date (ISO-8601, e.g. `2026-08-23`).
    pub est_date: String,
    /// World statistics after the day resolved.
    pub world: WorldStats,
    /// The day's narrative event, if one ran.
    #[serde(default)]
    pub event: Option<SnapshotEvent>,
    /// The option key that won the vote, if the day has resolved.
    #[serde(default)]
    pub chosen_option: Option<String>,
    /// Vote counts per option key for that day.
    #[serde(default)]
    pub tally: BTreeMap<String, u32>,
}

impl DailySnapshot {
    /// The event category for mix analysis, defaulting to `"unknown"`
    /// when the event reference or its category field is absent.
    pub fn category_or_unknown(&self) -> &str {
        self.event
            .as_ref()
            .and_then(|e| e.category.as_deref())
            .unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn history_entry_deserializes_from_wire_shape() {
        let raw = serde_json::json!({
            "est_date": "2026-08-01",
            "chosen_option": "ration",
            "world": { "morale": 62, "supplies": 48, "threat": 31, "last_event": "storm" },
            "event": { "headline": "Storm Front", "category": "crisis" },
            "tally": { "ration": 12, "feast": 3 }
        });

        let snapshot: DailySnapshot = serde_json::from_value(raw).unwrap();
        assert_eq!(snapshot.world.morale, 62);
        assert_eq!(snapshot.category_or_unknown(), "crisis");
        assert_eq!(snapshot.tally.get("ration"), Some(&12));
    }

    #[test]
    fn missing_event_defaults_to_unknown_category() {
        let raw = serde_json::json!({
            "est_date": "2026-08-02",
            "world": { "morale": 50, "supplies": 50, "threat": 50 }
        });

        let snapshot: DailySnapshot = serde_json::from_value(raw).unwrap();
        assert!(snapshot.event.is_none());
        assert_eq!(snapshot.category_or_unknown(), "unknown");
        assert!(snapshot.tally.is_empty());
    }

    #[test]
    fn event_without_category_defaults_to_unknown() {
        let raw = serde_json::json!({
            "est_date": "2026-08-03",
            "world": { "morale": 50, "supplies": 50, "threat": 50 },
            "event": { "headline": "Quiet Day" }
        });

        let snapshot: DailySnapshot = serde_json::from_value(raw).unwrap();
        assert_eq!(snapshot.category_or_unknown(), "unknown");
    }
}
