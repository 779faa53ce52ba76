//! World-balance analytics for the Holdfast admin dashboard.
//!
//! Three independent reducers over externally-fetched game data. Each is
//! pure, synchronous, and reentrant: call it with the current data,
//! receive a derived summary, discard and recompute when the source
//! changes. None performs I/O or holds state between calls.
//!
//! - [`drift`] -- average day-over-day stat change over the history
//!   window, with direction labels and advisory notes
//! - [`mix`] -- event category distribution over the last N days, with
//!   tuning hints for out-of-band categories
//! - [`balance`] -- average per-option stat impact of event definitions
//!   grouped by category
//!
//! Empty-input conventions differ by reducer and are preserved as the
//! dashboard expects them: drift and mix return `None` when there is
//! not enough data, category balance returns an empty vector.

pub mod balance;
pub mod drift;
pub mod mix;

pub use balance::{CategorySummary, compute_category_balance};
pub use drift::{DriftLabel, DriftNote, DriftSummary, compute_drift, drift_notes};
pub use mix::{
    DEFAULT_MIX_WINDOW, EventMix, MixHint, category_percent, compute_event_mix, mix_hint,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation for the derived summary types.

    #[test]
    fn export_bindings() {
        use ts_rs::TS;

        let _ = crate::drift::DriftSummary::export_all();
        let _ = crate::drift::DriftLabel::export_all();
        let _ = crate::drift::DriftNote::export_all();
        let _ = crate::mix::EventMix::export_all();
        let _ = crate::mix::MixHint::export_all();
        let _ = crate::balance::CategorySummary::export_all();
    }
}
