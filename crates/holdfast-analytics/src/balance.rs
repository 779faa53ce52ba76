//! Per-category balance of event definitions.
//!
//! Unlike drift and mix, which read the live history, this analysis
//! reads the event catalog itself: for each event the mean stat delta
//! across its options, accumulated into per-category averages. It
//! gauges how an event pool is *designed*, independent of what the
//! simulation actually rolled.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use holdfast_types::EventDefinition;

// ---------------------------------------------------------------------------
// Category Summary
// ---------------------------------------------------------------------------

/// Average per-option stat impact of one event category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CategorySummary {
    /// Category name.
    pub category: String,
    /// Mean morale delta across the category's events.
    pub avg_morale: f64,
    /// Mean supplies delta across the category's events.
    pub avg_supplies: f64,
    /// Mean threat delta across the category's events.
    pub avg_threat: f64,
    /// Number of event definitions in the category.
    pub event_count: usize,
}

/// Running per-category sums of per-event mean deltas.
struct CategoryAccumulator {
    morale: f64,
    supplies: f64,
    threat: f64,
    events: usize,
}

/// Compute per-category balance over the combined event pools.
///
/// Built-in events are processed before custom ones, and the output
/// preserves the first-occurrence order of categories in that combined
/// sequence (deliberately not sorted). An entirely empty catalog yields
/// an empty vector rather than `None`; callers treat "no events" and
/// "insufficient history" differently.
pub fn compute_category_balance(
    builtin: &[EventDefinition],
    custom: &[EventDefinition],
) -> Vec<CategorySummary> {
    // First-occurrence order matters, so pair an ordered list with a
    // category -> position index instead of iterating a map.
    let mut order: Vec<(String, CategoryAccumulator)> = Vec::new();
    let mut positions: BTreeMap<String, usize> = BTreeMap::new();

    for event in builtin.iter().chain(custom.iter()) {
        let (morale, supplies, threat) = mean_option_deltas(event);

        let position = match positions.get(event.category.as_str()) {
            Some(&p) => p,
            None => {
                let p = order.len();
                positions.insert(event.category.clone(), p);
                order.push((
                    event.category.clone(),
                    CategoryAccumulator {
                        morale: 0.0,
                        supplies: 0.0,
                        threat: 0.0,
                        events: 0,
                    },
                ));
                p
            }
        };

        if let Some((_, acc)) = order.get_mut(position) {
            acc.morale += morale;
            acc.supplies += supplies;
            acc.threat += threat;
            acc.events = acc.events.saturating_add(1);
        }
    }

    order
        .into_iter()
        .map(|(category, acc)| {
            #[allow(clippy::cast_precision_loss)]
            let count_f = acc.events.max(1) as f64;
            CategorySummary {
                category,
                avg_morale: acc.morale / count_f,
                avg_supplies: acc.supplies / count_f,
                avg_threat: acc.threat / count_f,
                event_count: acc.events,
            }
        })
        .collect()
}

/// Mean stat delta across an event's options.
///
/// The option count is clamped to at least 1 so a malformed
/// zero-option event contributes zeros instead of dividing by zero.
fn mean_option_deltas(event: &EventDefinition) -> (f64, f64, f64) {
    let mut morale_sum: i64 = 0;
    let mut supplies_sum: i64 = 0;
    let mut threat_sum: i64 = 0;

    for option in &event.options {
        morale_sum = morale_sum.saturating_add(option.deltas.morale);
        supplies_sum = supplies_sum.saturating_add(option.deltas.supplies);
        threat_sum = threat_sum.saturating_add(option.deltas.threat);
    }

    #[allow(clippy::cast_precision_loss)]
    let count = event.options.len().max(1) as f64;

    #[allow(clippy::cast_precision_loss)]
    let means = (
        morale_sum as f64 / count,
        supplies_sum as f64 / count,
        threat_sum as f64 / count,
    );

    means
}
