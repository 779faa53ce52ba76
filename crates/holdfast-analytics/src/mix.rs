//! Event category mix over a recent history window.
//!
//! Counts which event categories actually triggered over the last N
//! simulated days. The dashboard renders one card per category with a
//! percentage bar and, for out-of-band categories, a tuning hint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use holdfast_types::DailySnapshot;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Default number of trailing days in the mix window.
pub const DEFAULT_MIX_WINDOW: usize = 30;

/// Crisis share below this percentage reads as too gentle.
const CRISIS_GENTLE_PCT: f64 = 3.0;

/// Crisis share above this percentage reads as too punishing.
const CRISIS_PUNISHING_PCT: f64 = 20.0;

/// Opportunity share above this percentage reads as too generous.
const OPPORTUNITY_GENEROUS_PCT: f64 = 30.0;

// ---------------------------------------------------------------------------
// Event Mix
// ---------------------------------------------------------------------------

/// Category distribution over the analyzed window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EventMix {
    /// Number of days counted (window length, never zero).
    pub total: usize,
    /// Occurrence count per category name.
    pub by_category: BTreeMap<String, usize>,
}

/// Count event categories over the last `limit` snapshots.
///
/// Days without an event reference, or whose event lacks a category,
/// are counted under the literal `"unknown"` category. Returns `None`
/// when the window is empty (no history, or `limit` of zero).
pub fn compute_event_mix(history: &[DailySnapshot], limit: usize) -> Option<EventMix> {
    let start = history.len().saturating_sub(limit);
    let window = history.get(start..).unwrap_or_default();
    if window.is_empty() {
        return None;
    }

    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    for day in window {
        let count = by_category
            .entry(day.category_or_unknown().to_owned())
            .or_insert(0);
        *count = count.saturating_add(1);
    }

    Some(EventMix {
        total: window.len(),
        by_category,
    })
}

/// Share of the window occupied by a category, as a percentage.
///
/// Display rounding is the caller's concern; independently rounded
/// percentages need not sum to exactly 100.
pub fn category_percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let pct = count as f64 / total as f64 * 100.0;
    pct
}

// ---------------------------------------------------------------------------
// Tuning Hints
// ---------------------------------------------------------------------------

/// Tuning hint attached to an out-of-band category share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum MixHint {
    /// Crises almost never trigger.
    CrisisTooGentle,
    /// Crises are very common.
    CrisisTooPunishing,
    /// Opportunities are very frequent.
    OpportunityTooGenerous,
}

impl MixHint {
    /// Human-readable message shown on the dashboard.
    pub const fn message(self) -> &'static str {
        match self {
            Self::CrisisTooGentle => {
                "Crises almost never trigger; difficulty may feel too gentle."
            }
            Self::CrisisTooPunishing => "Crises are very common; this may feel punishing.",
            Self::OpportunityTooGenerous => {
                "Opportunities are very frequent; game may be too generous."
            }
        }
    }
}

/// Derive the tuning hint for a category's window share, if any.
///
/// Expected bands: crisis low but nonzero (roughly 5-15%), opportunity
/// rare-ish (10-25%); only excursions past the fixed thresholds get a
/// hint. Categories other than `crisis` and `opportunity` never do.
pub fn mix_hint(category: &str, pct: f64) -> Option<MixHint> {
    match category {
        "crisis" if pct < CRISIS_GENTLE_PCT => Some(MixHint::CrisisTooGentle),
        "crisis" if pct > CRISIS_PUNISHING_PCT => Some(MixHint::CrisisTooPunishing),
        "opportunity" if pct > OPPORTUNITY_GENEROUS_PCT => Some(MixHint::OpportunityTooGenerous),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use holdfast_types::{SnapshotEvent, WorldStats};

    fn snap_with_category(category: Option<&str>) -> DailySnapshot {
        DailySnapshot {
            est_date: String::from("2026-08-01"),
            world: WorldStats {
                morale: 50,
                supplies: 50,
                threat: 50,
            },
            event: category.map(|c| SnapshotEvent {
                category: Some(c.to_owned()),
                headline: None,
            }),
            chosen_option: None,
            tally: BTreeMap::new(),
        }
    }

    #[test]
    fn empty_history_has_no_mix() {
        assert!(compute_event_mix(&[], DEFAULT_MIX_WINDOW).is_none());
    }

    #[test]
    fn zero_limit_has_no_mix() {
        let history = vec![snap_with_category(Some("general"))];
        assert!(compute_event_mix(&history, 0).is_none());
    }

    #[test]
    fn short_history_uses_every_entry() {
        let history: Vec<DailySnapshot> =
            (0..5).map(|_| snap_with_category(Some("general"))).collect();
        let mix = compute_event_mix(&history, DEFAULT_MIX_WINDOW).unwrap();
        assert_eq!(mix.total, 5);
        assert_eq!(mix.by_category.get("general"), Some(&5));
    }

    #[test]
    fn window_takes_only_trailing_entries() {
        let mut history: Vec<DailySnapshot> =
            (0..10).map(|_| snap_with_category(Some("general"))).collect();
        history.extend((0..3).map(|_| snap_with_category(Some("crisis"))));

        let mix = compute_event_mix(&history, 3).unwrap();
        assert_eq!(mix.total, 3);
        assert_eq!(mix.by_category.get("crisis"), Some(&3));
        assert!(!mix.by_category.contains_key("general"));
    }

    #[test]
    fn crisis_share_of_ten_days() {
        // 3 crisis days out of 10 -> count 3, share 30%.
        let mut history: Vec<DailySnapshot> =
            (0..7).map(|_| snap_with_category(Some("general"))).collect();
        history.extend((0..3).map(|_| snap_with_category(Some("crisis"))));

        let mix = compute_event_mix(&history, DEFAULT_MIX_WINDOW).unwrap();
        assert_eq!(mix.total, 10);
        assert_eq!(mix.by_category.get("crisis"), Some(&3));

        let pct = category_percent(3, mix.total);
        assert!((pct - 30.0).abs() < 1e-10);
    }

    #[test]
    fn days_without_events_count_as_unknown() {
        let history = vec![
            snap_with_category(None),
            snap_with_category(Some("narrative")),
            snap_with_category(None),
        ];
        let mix = compute_event_mix(&history, DEFAULT_MIX_WINDOW).unwrap();
        assert_eq!(mix.by_category.get("unknown"), Some(&2));
        assert_eq!(mix.by_category.get("narrative"), Some(&1));
    }

    #[test]
    fn idempotent_over_the_same_input() {
        let history = vec![
            snap_with_category(Some("crisis")),
            snap_with_category(None),
            snap_with_category(Some("opportunity")),
        ];
        assert_eq!(
            compute_event_mix(&history, DEFAULT_MIX_WINDOW),
            compute_event_mix(&history, DEFAULT_MIX_WINDOW)
        );
    }

    #[test]
    fn hint_thresholds() {
        assert_eq!(mix_hint("crisis", 2.9), Some(MixHint::CrisisTooGentle));
        assert_eq!(mix_hint("crisis", 3.0), None);
        assert_eq!(mix_hint("crisis", 20.0), None);
        assert_eq!(mix_hint("crisis", 20.1), Some(MixHint::CrisisTooPunishing));
        assert_eq!(
            mix_hint("opportunity", 35.0),
            Some(MixHint::OpportunityTooGenerous)
        );
        assert_eq!(mix_hint("opportunity", 30.0), None);
        assert_eq!(mix_hint("general", 99.0), None);
        assert_eq!(mix_hint("unknown", 0.0), None);
    }

    #[test]
    fn percent_of_empty_window_is_zero() {
        assert!((category_percent(0, 0) - 0.0).abs() < 1e-10);
    }
}
