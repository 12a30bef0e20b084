use leptos::prelude::*;

use super::state::{active_filters_count, reduce, FilterAction, FilterSelection, FilterState};

/// Copyable handle to one view's filter state.
///
/// The signal is private: components read reactively through [`Self::read`]
/// and mutate only by dispatching actions, so no collaborator can reach
/// into the state by reference. All accessors use the `try_` signal API and
/// degrade to no-ops once the owning view is disposed, which is what makes
/// late debounce timers and stale responses harmless after teardown.
#[derive(Clone, Copy)]
pub struct FilterStore {
    state: RwSignal<FilterState>,
}

impl FilterStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(FilterState::default()),
        }
    }

    /// Apply one action. No-op after the owning view is disposed.
    pub fn dispatch(&self, action: FilterAction) {
        let _ = self.state.try_update(|state| reduce(state, action));
    }

    /// Read-only reactive view of the state.
    pub fn read(&self) -> ReadSignal<FilterState> {
        self.state.read_only()
    }

    /// Current state without tracking; `None` once disposed.
    pub fn try_snapshot(&self) -> Option<FilterState> {
        self.state.try_get_untracked()
    }

    /// Reactive active-filter badge count.
    pub fn active_count(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(active_filters_count))
    }

    /// Reactive user-selection fingerprint; changes only when a field the
    /// backend cares about changes, so it is safe to drive the debounced
    /// apply from this without feedback loops.
    pub fn selection(&self) -> Memo<FilterSelection> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.selection()))
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}
