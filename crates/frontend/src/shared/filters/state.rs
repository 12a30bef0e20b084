use chrono::NaiveDate;
use contracts::shared::filters::{DateRangeKind, FilterOptions};
use serde_json::Value;

/// Upper bound on [`active_filters_count`]: the date dimension, nine
/// multi-select lists and the search text each contribute at most one.
pub const MAX_ACTIVE_FILTERS: usize = 11;

/// Which of the four status vocabularies a status action addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Order,
    Expense,
    Invoice,
    Task,
}

/// Composite filter state for one dashboard view.
///
/// Owned exclusively by a [`super::store::FilterStore`]; every mutation
/// goes through [`reduce`]. The store enforces the date invariant: a
/// non-custom range kind never coexists with custom bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub date_range: DateRangeKind,
    pub custom_start: Option<NaiveDate>,
    pub custom_end: Option<NaiveDate>,

    // multi-select identifier lists, insertion-ordered, no duplicates
    pub categories: Vec<String>,
    pub order_statuses: Vec<String>,
    pub expense_statuses: Vec<String>,
    pub invoice_statuses: Vec<String>,
    pub task_statuses: Vec<String>,
    pub branches: Vec<String>,
    pub payment_methods: Vec<String>,
    pub lead_sources: Vec<String>,
    pub task_priorities: Vec<String>,

    pub search: String,

    /// Reference data from the options endpoint; None until first load
    pub filter_options: Option<FilterOptions>,
    pub options_loading: bool,
    pub options_error: Option<String>,

    /// Last successfully applied result, stored verbatim
    pub filtered_data: Option<Value>,
    pub data_loading: bool,
    pub data_error: Option<String>,

    pub is_panel_open: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            date_range: DateRangeKind::default(),
            custom_start: None,
            custom_end: None,
            categories: Vec::new(),
            order_statuses: Vec::new(),
            expense_statuses: Vec::new(),
            invoice_statuses: Vec::new(),
            task_statuses: Vec::new(),
            branches: Vec::new(),
            payment_methods: Vec::new(),
            lead_sources: Vec::new(),
            task_priorities: Vec::new(),
            search: String::new(),
            filter_options: None,
            options_loading: false,
            options_error: None,
            filtered_data: None,
            data_loading: false,
            data_error: None,
            is_panel_open: false,
        }
    }
}

/// User-selection projection of [`FilterState`].
///
/// Excludes loading flags, loaded options, results and panel visibility, so
/// it only changes when a selection the backend cares about changes. Used
/// as the reactive fingerprint that triggers the debounced apply.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub date_range: DateRangeKind,
    pub custom_start: Option<NaiveDate>,
    pub custom_end: Option<NaiveDate>,
    pub categories: Vec<String>,
    pub order_statuses: Vec<String>,
    pub expense_statuses: Vec<String>,
    pub invoice_statuses: Vec<String>,
    pub task_statuses: Vec<String>,
    pub branches: Vec<String>,
    pub payment_methods: Vec<String>,
    pub lead_sources: Vec<String>,
    pub task_priorities: Vec<String>,
    pub search: String,
}

impl FilterState {
    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            date_range: self.date_range,
            custom_start: self.custom_start,
            custom_end: self.custom_end,
            categories: self.categories.clone(),
            order_statuses: self.order_statuses.clone(),
            expense_statuses: self.expense_statuses.clone(),
            invoice_statuses: self.invoice_statuses.clone(),
            task_statuses: self.task_statuses.clone(),
            branches: self.branches.clone(),
            payment_methods: self.payment_methods.clone(),
            lead_sources: self.lead_sources.clone(),
            task_priorities: self.task_priorities.clone(),
            search: self.search.clone(),
        }
    }

    pub fn status_list(&self, kind: StatusKind) -> &Vec<String> {
        match kind {
            StatusKind::Order => &self.order_statuses,
            StatusKind::Expense => &self.expense_statuses,
            StatusKind::Invoice => &self.invoice_statuses,
            StatusKind::Task => &self.task_statuses,
        }
    }

    fn status_list_mut(&mut self, kind: StatusKind) -> &mut Vec<String> {
        match kind {
            StatusKind::Order => &mut self.order_statuses,
            StatusKind::Expense => &mut self.expense_statuses,
            StatusKind::Invoice => &mut self.invoice_statuses,
            StatusKind::Task => &mut self.task_statuses,
        }
    }
}

/// Every transition of the filter state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterAction {
    SetDateRange(DateRangeKind),
    SetCustomDateRange(NaiveDate, NaiveDate),

    SetCategories(Vec<String>),
    ToggleCategory(String),
    SetStatuses(StatusKind, Vec<String>),
    ToggleStatus(StatusKind, String),
    SetBranches(Vec<String>),
    ToggleBranch(String),
    SetPaymentMethods(Vec<String>),
    TogglePaymentMethod(String),
    SetLeadSources(Vec<String>),
    ToggleLeadSource(String),
    SetTaskPriorities(Vec<String>),
    ToggleTaskPriority(String),

    SetSearch(String),

    SetFilterOptions(FilterOptions),
    SetOptionsLoading(bool),
    SetOptionsError(String),

    SetFilteredData(Value),
    SetDataLoading(bool),
    SetDataError(String),

    TogglePanel,
    SetPanelOpen(bool),

    /// Restore all selections to defaults; keep options, flags and data
    ResetFilters,
    /// Restore the entire state to initial defaults
    ResetAll,
}

/// Apply one action to the state. Synchronous and total: every action has
/// a defined transition.
pub fn reduce(state: &mut FilterState, action: FilterAction) {
    match action {
        FilterAction::SetDateRange(kind) => {
            state.date_range = kind;
            // non-custom kind and custom bounds are mutually exclusive
            state.custom_start = None;
            state.custom_end = None;
        }
        FilterAction::SetCustomDateRange(start, end) => {
            state.date_range = DateRangeKind::CustomRange;
            state.custom_start = Some(start);
            state.custom_end = Some(end);
        }

        FilterAction::SetCategories(values) => state.categories = dedup(values),
        FilterAction::ToggleCategory(id) => toggle(&mut state.categories, id),
        FilterAction::SetStatuses(kind, values) => *state.status_list_mut(kind) = dedup(values),
        FilterAction::ToggleStatus(kind, id) => toggle(state.status_list_mut(kind), id),
        FilterAction::SetBranches(values) => state.branches = dedup(values),
        FilterAction::ToggleBranch(id) => toggle(&mut state.branches, id),
        FilterAction::SetPaymentMethods(values) => state.payment_methods = dedup(values),
        FilterAction::TogglePaymentMethod(id) => toggle(&mut state.payment_methods, id),
        FilterAction::SetLeadSources(values) => state.lead_sources = dedup(values),
        FilterAction::ToggleLeadSource(id) => toggle(&mut state.lead_sources, id),
        FilterAction::SetTaskPriorities(values) => state.task_priorities = dedup(values),
        FilterAction::ToggleTaskPriority(id) => toggle(&mut state.task_priorities, id),

        FilterAction::SetSearch(text) => state.search = text,

        FilterAction::SetFilterOptions(options) => {
            state.filter_options = Some(options);
            state.options_loading = false;
            state.options_error = None;
        }
        FilterAction::SetOptionsLoading(loading) => state.options_loading = loading,
        FilterAction::SetOptionsError(message) => {
            state.options_error = Some(message);
            state.options_loading = false;
        }

        FilterAction::SetFilteredData(data) => {
            state.filtered_data = Some(data);
            state.data_loading = false;
            state.data_error = None;
        }
        FilterAction::SetDataLoading(loading) => state.data_loading = loading,
        FilterAction::SetDataError(message) => {
            state.data_error = Some(message);
            state.data_loading = false;
        }

        FilterAction::TogglePanel => state.is_panel_open = !state.is_panel_open,
        FilterAction::SetPanelOpen(open) => state.is_panel_open = open,

        FilterAction::ResetFilters => {
            let defaults = FilterState::default();
            state.date_range = defaults.date_range;
            state.custom_start = None;
            state.custom_end = None;
            state.categories.clear();
            state.order_statuses.clear();
            state.expense_statuses.clear();
            state.invoice_statuses.clear();
            state.task_statuses.clear();
            state.branches.clear();
            state.payment_methods.clear();
            state.lead_sources.clear();
            state.task_priorities.clear();
            state.search.clear();
        }
        FilterAction::ResetAll => *state = FilterState::default(),
    }
}

/// Symmetric-difference toggle with stable removal: a present id is
/// removed in place keeping the order of the rest, an absent id is
/// appended.
fn toggle(list: &mut Vec<String>, id: String) {
    let before = list.len();
    list.retain(|existing| *existing != id);
    if list.len() == before {
        list.push(id);
    }
}

/// Drop duplicate ids keeping first occurrence order.
fn dedup(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// Number of filter dimensions that differ from their defaults.
///
/// Pure derivation over the selection fields; loading/error/panel flags do
/// not contribute. The date dimension contributes at most one: the reducer
/// keeps a non-default kind and custom bounds mutually exclusive, so no
/// defensive double-count branch is needed here.
pub fn active_filters_count(state: &FilterState) -> usize {
    let mut count = 0;

    let date_active = state.date_range != DateRangeKind::default()
        || (state.custom_start.is_some() && state.custom_end.is_some());
    if date_active {
        count += 1;
    }

    let lists = [
        &state.categories,
        &state.order_statuses,
        &state.expense_statuses,
        &state.invoice_statuses,
        &state.task_statuses,
        &state.branches,
        &state.payment_methods,
        &state.lead_sources,
        &state.task_priorities,
    ];
    count += lists.iter().filter(|list| !list.is_empty()).count();

    if !state.search.trim().is_empty() {
        count += 1;
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let state = FilterState::default();
        assert_eq!(state.date_range, DateRangeKind::Last30Days);
        assert!(state.custom_start.is_none());
        assert!(state.filter_options.is_none());
        assert!(!state.is_panel_open);
        assert_eq!(active_filters_count(&state), 0);
    }

    #[test]
    fn test_set_date_range_clears_custom_bounds() {
        let mut state = FilterState::default();
        reduce(
            &mut state,
            FilterAction::SetCustomDateRange(date(2025, 1, 1), date(2025, 1, 31)),
        );
        assert_eq!(state.date_range, DateRangeKind::CustomRange);

        reduce(&mut state, FilterAction::SetDateRange(DateRangeKind::ThisMonth));
        assert_eq!(state.date_range, DateRangeKind::ThisMonth);
        assert!(state.custom_start.is_none());
        assert!(state.custom_end.is_none());
    }

    #[test]
    fn test_custom_range_forces_kind_and_counts_once() {
        let mut state = FilterState::default();
        reduce(&mut state, FilterAction::SetDateRange(DateRangeKind::ThisMonth));
        reduce(
            &mut state,
            FilterAction::SetCustomDateRange(date(2025, 1, 1), date(2025, 1, 31)),
        );
        assert_eq!(state.date_range, DateRangeKind::CustomRange);
        assert_eq!(state.custom_start, Some(date(2025, 1, 1)));
        assert_eq!(state.custom_end, Some(date(2025, 1, 31)));
        // date contributes exactly one despite kind + bounds both being set
        assert_eq!(active_filters_count(&state), 1);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut state = FilterState::default();
        let original = state.categories.clone();
        reduce(&mut state, FilterAction::ToggleCategory("3".to_string()));
        assert_eq!(state.categories, ids(&["3"]));
        reduce(&mut state, FilterAction::ToggleCategory("3".to_string()));
        assert_eq!(state.categories, original);
    }

    #[test]
    fn test_toggle_removal_is_stable() {
        let mut state = FilterState::default();
        reduce(&mut state, FilterAction::SetCategories(ids(&["1", "2", "3", "4"])));
        reduce(&mut state, FilterAction::ToggleCategory("2".to_string()));
        assert_eq!(state.categories, ids(&["1", "3", "4"]));
        // re-toggling appends at the end
        reduce(&mut state, FilterAction::ToggleCategory("2".to_string()));
        assert_eq!(state.categories, ids(&["1", "3", "4", "2"]));
    }

    #[test]
    fn test_set_list_drops_duplicates() {
        let mut state = FilterState::default();
        reduce(&mut state, FilterAction::SetBranches(ids(&["b1", "b2", "b1"])));
        assert_eq!(state.branches, ids(&["b1", "b2"]));
    }

    #[test]
    fn test_status_lists_are_independent() {
        let mut state = FilterState::default();
        reduce(
            &mut state,
            FilterAction::ToggleStatus(StatusKind::Order, "pending".to_string()),
        );
        reduce(
            &mut state,
            FilterAction::ToggleStatus(StatusKind::Invoice, "paid".to_string()),
        );
        assert_eq!(state.order_statuses, ids(&["pending"]));
        assert_eq!(state.invoice_statuses, ids(&["paid"]));
        assert!(state.expense_statuses.is_empty());
        assert!(state.task_statuses.is_empty());
        assert_eq!(state.status_list(StatusKind::Order), &ids(&["pending"]));
    }

    #[test]
    fn test_search_is_stored_verbatim() {
        let mut state = FilterState::default();
        reduce(&mut state, FilterAction::SetSearch("  printer  ".to_string()));
        assert_eq!(state.search, "  printer  ");
    }

    #[test]
    fn test_options_transitions() {
        let mut state = FilterState::default();
        reduce(&mut state, FilterAction::SetOptionsLoading(true));
        assert!(state.options_loading);

        reduce(&mut state, FilterAction::SetFilterOptions(FilterOptions::default()));
        assert!(state.filter_options.is_some());
        assert!(!state.options_loading);
        assert!(state.options_error.is_none());

        reduce(&mut state, FilterAction::SetOptionsLoading(true));
        reduce(&mut state, FilterAction::SetOptionsError("503".to_string()));
        assert!(!state.options_loading);
        assert_eq!(state.options_error.as_deref(), Some("503"));
        // previously loaded options survive a failed refresh
        assert!(state.filter_options.is_some());
    }

    #[test]
    fn test_data_transitions() {
        let mut state = FilterState::default();
        reduce(&mut state, FilterAction::SetDataLoading(true));
        reduce(&mut state, FilterAction::SetFilteredData(serde_json::json!({"rows": []})));
        assert!(!state.data_loading);
        assert!(state.data_error.is_none());
        assert!(state.filtered_data.is_some());

        reduce(&mut state, FilterAction::SetDataLoading(true));
        reduce(&mut state, FilterAction::SetDataError("timeout".to_string()));
        assert!(!state.data_loading);
        assert_eq!(state.data_error.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_panel_toggle() {
        let mut state = FilterState::default();
        reduce(&mut state, FilterAction::TogglePanel);
        assert!(state.is_panel_open);
        reduce(&mut state, FilterAction::SetPanelOpen(false));
        assert!(!state.is_panel_open);
    }

    #[test]
    fn test_reset_filters_keeps_options_and_data() {
        let mut state = FilterState::default();
        reduce(&mut state, FilterAction::SetFilterOptions(FilterOptions::default()));
        reduce(&mut state, FilterAction::SetFilteredData(serde_json::json!(1)));
        reduce(&mut state, FilterAction::SetDateRange(DateRangeKind::ThisYear));
        reduce(&mut state, FilterAction::ToggleCategory("3".to_string()));
        reduce(&mut state, FilterAction::SetSearch("abc".to_string()));
        reduce(&mut state, FilterAction::SetPanelOpen(true));

        reduce(&mut state, FilterAction::ResetFilters);
        assert_eq!(active_filters_count(&state), 0);
        assert_eq!(state.date_range, DateRangeKind::Last30Days);
        assert!(state.categories.is_empty());
        assert!(state.search.is_empty());
        // non-selection fields untouched
        assert!(state.filter_options.is_some());
        assert!(state.filtered_data.is_some());
        assert!(state.is_panel_open);
    }

    #[test]
    fn test_reset_all_restores_initial_state() {
        let mut state = FilterState::default();
        reduce(&mut state, FilterAction::SetFilterOptions(FilterOptions::default()));
        reduce(&mut state, FilterAction::SetFilteredData(serde_json::json!(1)));
        reduce(&mut state, FilterAction::ToggleBranch("b1".to_string()));

        reduce(&mut state, FilterAction::ResetAll);
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_count_blank_search_does_not_contribute() {
        let mut state = FilterState::default();
        reduce(&mut state, FilterAction::SetCategories(ids(&["3", "7"])));
        reduce(&mut state, FilterAction::SetSearch("  ".to_string()));
        assert_eq!(active_filters_count(&state), 1);
    }

    #[test]
    fn test_count_each_list_contributes_once() {
        let mut state = FilterState::default();
        reduce(&mut state, FilterAction::SetCategories(ids(&["1", "2", "3"])));
        assert_eq!(active_filters_count(&state), 1);
        reduce(&mut state, FilterAction::ToggleBranch("b1".to_string()));
        assert_eq!(active_filters_count(&state), 2);
    }

    #[test]
    fn test_count_reaches_exact_maximum() {
        let mut state = FilterState::default();
        reduce(&mut state, FilterAction::SetDateRange(DateRangeKind::Today));
        reduce(&mut state, FilterAction::SetCategories(ids(&["c"])));
        reduce(&mut state, FilterAction::SetStatuses(StatusKind::Order, ids(&["s"])));
        reduce(&mut state, FilterAction::SetStatuses(StatusKind::Expense, ids(&["s"])));
        reduce(&mut state, FilterAction::SetStatuses(StatusKind::Invoice, ids(&["s"])));
        reduce(&mut state, FilterAction::SetStatuses(StatusKind::Task, ids(&["s"])));
        reduce(&mut state, FilterAction::SetBranches(ids(&["b"])));
        reduce(&mut state, FilterAction::SetPaymentMethods(ids(&["p"])));
        reduce(&mut state, FilterAction::SetLeadSources(ids(&["l"])));
        reduce(&mut state, FilterAction::SetTaskPriorities(ids(&["t"])));
        reduce(&mut state, FilterAction::SetSearch("x".to_string()));
        assert_eq!(active_filters_count(&state), MAX_ACTIVE_FILTERS);
    }

    #[test]
    fn test_selection_ignores_transient_fields() {
        let mut state = FilterState::default();
        let selection = state.selection();
        reduce(&mut state, FilterAction::SetDataLoading(true));
        reduce(&mut state, FilterAction::SetOptionsError("x".to_string()));
        reduce(&mut state, FilterAction::TogglePanel);
        assert_eq!(state.selection(), selection);

        reduce(&mut state, FilterAction::SetSearch("q".to_string()));
        assert_ne!(state.selection(), selection);
    }
}
