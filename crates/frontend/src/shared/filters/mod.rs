//! Dashboard filter engine: composite filter state, date range resolution,
//! debounced apply pipeline and reference-data loading.
//!
//! One [`store::FilterStore`] instance is owned per dashboard view; all
//! mutation goes through dispatched [`state::FilterAction`]s. The
//! [`applier::FilterApplier`] is the only place that talks to the
//! apply-filters endpoint and the only owner of the debounce timer and the
//! race-guard sequence.

pub mod api;
pub mod applier;
pub mod date_range;
pub mod options;
pub mod state;
pub mod store;
