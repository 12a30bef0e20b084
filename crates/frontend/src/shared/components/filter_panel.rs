use crate::shared::filters::state::FilterAction;
use crate::shared::filters::store::FilterStore;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - collapsible filter panel bound to a [`FilterStore`]
///
/// Header shows the active-filter badge and, when any filter is active,
/// a "Clear all" button dispatching [`FilterAction::ResetFilters`]. Panel
/// visibility lives in the store (`is_panel_open`), not in local state.
#[component]
pub fn FilterPanel(
    /// Store owning this view's filter state
    store: FilterStore,

    /// Filter content (form fields)
    #[prop(into)]
    filter_content: ChildrenFn,

    /// Filter tags (active filter chips) - optional
    #[prop(optional, into)]
    filter_tags: Option<ChildrenFn>,
) -> impl IntoView {
    let state = store.read();
    let active_count = store.active_count();
    let is_open = move || state.with(|s| s.is_panel_open);

    let toggle_open = move |_| {
        store.dispatch(FilterAction::TogglePanel);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_open
                >
                    <svg
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class=move || {
                            if is_open() {
                                "filter-panel__chevron filter-panel__chevron--expanded"
                            } else {
                                "filter-panel__chevron"
                            }
                        }
                    >
                        <polyline points="6 9 12 15 18 9"></polyline>
                    </svg>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <div class="filter-panel-header__right">
                    {move || {
                        if active_count.get() > 0 {
                            view! {
                                <button
                                    class="filter-panel__clear-all"
                                    on:click=move |e| {
                                        e.stop_propagation();
                                        store.dispatch(FilterAction::ResetFilters);
                                    }
                                >
                                    "Clear all"
                                </button>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
            </div>

            <div class=move || {
                if is_open() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content()}
                    {filter_tags.as_ref().map(|tags| view! {
                        <div class="filter-panel-tags">{tags()}</div>
                    })}
                </div>
            </div>
        </div>
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <svg
                width="12"
                height="12"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                <line x1="18" y1="6" x2="6" y2="18"></line>
                <line x1="6" y1="6" x2="18" y2="18"></line>
            </svg>
        </div>
    }
}
