use chrono::{Local, NaiveDate};
use contracts::shared::filters::ApplyFiltersRequest;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use super::api;
use super::date_range;
use super::state::{FilterAction, FilterState};
use super::store::FilterStore;

pub const DEFAULT_DEBOUNCE_MS: u32 = 400;

/// Debounced apply-filters pipeline with a race guard.
///
/// Holds the single debounce timer generation and the monotonically
/// increasing request sequence for one view. Rapid selection changes within
/// the debounce window collapse into one remote call; of the calls in
/// flight, only the most recently dispatched one is allowed to write its
/// result back. The sequencing itself is synchronous ([`Self::next_generation`],
/// [`Self::begin_request`], [`Self::finish_request`]); the async tasks only
/// sleep, fetch and delegate to it.
#[derive(Clone, Copy)]
pub struct FilterApplier {
    store: FilterStore,
    branch_id: Signal<Option<String>>,
    delay_ms: u32,
    debounce_gen: StoredValue<u64>,
    request_seq: StoredValue<u64>,
}

impl FilterApplier {
    pub fn new(store: FilterStore, branch_id: Signal<Option<String>>) -> Self {
        Self::with_delay(store, branch_id, DEFAULT_DEBOUNCE_MS)
    }

    pub fn with_delay(store: FilterStore, branch_id: Signal<Option<String>>, delay_ms: u32) -> Self {
        Self {
            store,
            branch_id,
            delay_ms,
            debounce_gen: StoredValue::new(0),
            request_seq: StoredValue::new(0),
        }
    }

    /// (Re)start the debounce window; fires at most one remote call after
    /// the window passes without another schedule.
    pub fn schedule_apply(&self) {
        let Some(generation) = self.next_generation() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.delay_ms).await;
            // superseded by a later schedule, or the view was torn down
            if !this.is_current_generation(generation) {
                return;
            }
            if let Err(error) = this.apply_now().await {
                log::debug!("debounced apply failed: {}", error);
            }
        });
    }

    /// Fire immediately, bypassing the debounce timer but participating in
    /// the same race guard. The failure is recorded in `data_error` and
    /// also returned so the caller can surface it.
    pub async fn apply_now(&self) -> Result<(), String> {
        let Some(tag) = self.begin_request() else {
            return Err("filter context disposed".to_string());
        };
        let Some(state) = self.store.try_snapshot() else {
            return Err("filter context disposed".to_string());
        };
        let payload = build_payload(&state, Local::now().date_naive());
        let branch = self.branch_id.try_get_untracked().flatten();

        let result = api::apply_filters(&payload, branch.as_deref()).await;
        let applied = self.finish_request(tag, &result);
        match result {
            Err(error) if applied => Err(error),
            // stale outcomes are discarded, success or not
            _ => Ok(()),
        }
    }

    /// Bump the debounce generation; `None` once the view is disposed.
    fn next_generation(&self) -> Option<u64> {
        self.debounce_gen.try_update_value(|g| {
            *g += 1;
            *g
        })
    }

    fn is_current_generation(&self, generation: u64) -> bool {
        self.debounce_gen.try_get_value() == Some(generation)
    }

    /// Allocate the next request tag and raise `data_loading`.
    fn begin_request(&self) -> Option<u64> {
        let tag = self.request_seq.try_update_value(|s| {
            *s += 1;
            *s
        })?;
        self.store.dispatch(FilterAction::SetDataLoading(true));
        Some(tag)
    }

    /// Write a finished call's outcome to the store if it is still the
    /// latest dispatched call. Returns whether the outcome was applied.
    fn finish_request(&self, tag: u64, result: &Result<Value, String>) -> bool {
        if self.request_seq.try_get_value() != Some(tag) {
            log::debug!("discarding stale apply response (tag {})", tag);
            return false;
        }
        match result {
            Ok(data) => self.store.dispatch(FilterAction::SetFilteredData(data.clone())),
            Err(error) => self.store.dispatch(FilterAction::SetDataError(error.clone())),
        }
        true
    }
}

/// Map the current state to the canonical wire payload, resolving the
/// symbolic date selection against `today`.
pub fn build_payload(state: &FilterState, today: NaiveDate) -> ApplyFiltersRequest {
    let bounds = date_range::resolve(
        state.date_range,
        state.custom_start,
        state.custom_end,
        today,
    );
    ApplyFiltersRequest {
        date_range: state.date_range,
        start_date: bounds.start_string(),
        end_date: bounds.end_string(),
        categories: state.categories.clone(),
        order_statuses: state.order_statuses.clone(),
        expense_statuses: state.expense_statuses.clone(),
        invoice_statuses: state.invoice_statuses.clone(),
        task_statuses: state.task_statuses.clone(),
        branches: state.branches.clone(),
        payment_methods: state.payment_methods.clone(),
        lead_sources: state.lead_sources.clone(),
        task_priorities: state.task_priorities.clone(),
        search: state.search.clone(),
    }
}
