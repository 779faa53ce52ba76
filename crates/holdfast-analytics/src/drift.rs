//! Stat drift analysis over the daily history.
//!
//! Drift is the average day-over-day change of each world statistic
//! across a history window. It answers the balance question "where is
//! the world heading if nothing changes" and drives the Balance
//! Snapshot panel on the admin dashboard.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use holdfast_types::DailySnapshot;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Average daily change above this is classified as rising.
const RISING_THRESHOLD: f64 = 1.0;

/// Average daily change below this is classified as falling.
const FALLING_THRESHOLD: f64 = -1.0;

/// Morale/supplies drift above this (with threat falling) reads as a
/// very forgiving game.
const FORGIVING_GAIN_THRESHOLD: f64 = 3.0;

/// Supplies drift below this reads as a draining economy.
const SUPPLY_DRAIN_THRESHOLD: f64 = -5.0;

/// Threat drift above this reads as a constant-siege difficulty curve.
const THREAT_CLIMB_THRESHOLD: f64 = 2.0;

/// All three stats within this band of zero reads as roughly stable.
const STABLE_BAND: f64 = 1.0;

// ---------------------------------------------------------------------------
// Drift Summary
// ---------------------------------------------------------------------------

/// Average day-over-day stat change over a history window.
///
/// Recomputed wholesale from the latest fetched history on every
/// request; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DriftSummary {
    /// Mean daily morale change.
    pub avg_morale: f64,
    /// Mean daily supplies change.
    pub avg_supplies: f64,
    /// Mean daily threat change.
    pub avg_threat: f64,
    /// Number of day-over-day deltas averaged (`history length - 1`).
    pub days: usize,
}

/// Compute the drift summary for an oldest-first history.
///
/// Returns `None` when fewer than two snapshots exist, since no
/// day-over-day delta can be formed. The caller renders a
/// "not enough history" fallback in that case.
pub fn compute_drift(history: &[DailySnapshot]) -> Option<DriftSummary> {
    if history.len() < 2 {
        return None;
    }

    let mut morale_sum: i64 = 0;
    let mut supplies_sum: i64 = 0;
    let mut threat_sum: i64 = 0;

    for pair in history.windows(2) {
        let [prev, curr] = pair else { continue };
        morale_sum = morale_sum.saturating_add(curr.world.morale.saturating_sub(prev.world.morale));
        supplies_sum =
            supplies_sum.saturating_add(curr.world.supplies.saturating_sub(prev.world.supplies));
        threat_sum = threat_sum.saturating_add(curr.world.threat.saturating_sub(prev.world.threat));
    }

    let days = history.len().saturating_sub(1);
    #[allow(clippy::cast_precision_loss)]
    let days_f = days as f64;

    #[allow(clippy::cast_precision_loss)]
    let summary = DriftSummary {
        avg_morale: morale_sum as f64 / days_f,
        avg_supplies: supplies_sum as f64 / days_f,
        avg_threat: threat_sum as f64 / days_f,
        days,
    };

    Some(summary)
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Direction classification of a single drift value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum DriftLabel {
    /// Average daily change above `+1`.
    Rising,
    /// Average daily change within the `[-1, +1]` band.
    Stable,
    /// Average daily change below `-1`.
    Falling,
}

impl DriftLabel {
    /// Classify a drift value against the fixed thresholds.
    pub fn classify(value: f64) -> Self {
        if value > RISING_THRESHOLD {
            Self::Rising
        } else if value < FALLING_THRESHOLD {
            Self::Falling
        } else {
            Self::Stable
        }
    }
}

// ---------------------------------------------------------------------------
// Advisory Notes
// ---------------------------------------------------------------------------

/// Balance advisory derived from a drift summary.
///
/// Presentation-layer hints with fixed thresholds; they carry no
/// persistence or tuning mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum DriftNote {
    /// Morale and supplies climbing while threat falls.
    VeryForgiving,
    /// Supplies draining quickly on average.
    SuppliesDraining,
    /// Threat climbing fast.
    ThreatClimbing,
    /// All three stats roughly flat.
    RoughlyStable,
}

impl DriftNote {
    /// Human-readable message shown on the dashboard.
    pub const fn message(self) -> &'static str {
        match self {
            Self::VeryForgiving => {
                "Game looks very forgiving right now (might be too easy)."
            }
            Self::SuppliesDraining => {
                "Supplies are draining quickly on average. Consider buffing supply events or projects."
            }
            Self::ThreatClimbing => {
                "Threat is climbing fast. Players may feel constantly under siege."
            }
            Self::RoughlyStable => {
                "Stats are roughly stable. Difficulty may depend mostly on specific events."
            }
        }
    }
}

/// Derive the advisory notes that apply to a drift summary.
///
/// The conditions are not mutually exclusive; zero, one, or several
/// notes may apply.
pub fn drift_notes(summary: &DriftSummary) -> Vec<DriftNote> {
    let mut notes = Vec::new();

    if summary.avg_morale > FORGIVING_GAIN_THRESHOLD
        && summary.avg_supplies > FORGIVING_GAIN_THRESHOLD
        && summary.avg_threat < FALLING_THRESHOLD
    {
        notes.push(DriftNote::VeryForgiving);
    }
    if summary.avg_supplies < SUPPLY_DRAIN_THRESHOLD {
        notes.push(DriftNote::SuppliesDraining);
    }
    if summary.avg_threat > THREAT_CLIMB_THRESHOLD {
        notes.push(DriftNote::ThreatClimbing);
    }
    if summary.avg_morale.abs() <= STABLE_BAND
        && summary.avg_supplies.abs() <= STABLE_BAND
        && summary.avg_threat.abs() <= STABLE_BAND
    {
        notes.push(DriftNote::RoughlyStable);
    }

    notes
}
