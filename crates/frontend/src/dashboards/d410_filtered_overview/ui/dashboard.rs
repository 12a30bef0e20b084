use crate::shared::components::date_range_select::{kind_label, DateRangeSelect};
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::multi_select_filter::MultiSelectFilter;
use crate::shared::filters::applier::FilterApplier;
use crate::shared::filters::options::load_filter_options;
use crate::shared::filters::state::{FilterAction, StatusKind};
use crate::shared::filters::store::FilterStore;
use chrono::NaiveDate;
use contracts::shared::filters::{DateRangeKind, FilterOption, FilterOptions};
use leptos::children::{ChildrenFn, ToChildren};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[component]
pub fn FilteredOverviewDashboard() -> impl IntoView {
    // One filter context per dashboard view: store, branch scope, applier.
    let store = FilterStore::new();
    let branch_id = RwSignal::new(None::<String>);
    let applier = FilterApplier::new(store, branch_id.into());

    let state = store.read();
    let selection = store.selection();

    // Reference data follows the branch context.
    Effect::new(move |_| {
        let branch = branch_id.get();
        spawn_local(async move {
            // failure is already recorded in options_error and rendered below
            let _ = load_filter_options(store, branch).await;
        });
    });

    // Every selection change (and only selection changes) restarts the
    // debounce window.
    Effect::new(move |_| {
        selection.track();
        applier.schedule_apply();
    });

    let on_apply_click = move |_| {
        spawn_local(async move {
            if let Err(error) = applier.apply_now().await {
                log::warn!("manual apply failed: {}", error);
            }
        });
    };

    let options = Signal::derive(move || {
        state.with(|s| s.filter_options.clone().unwrap_or_default())
    });

    let on_kind_change = Callback::new(move |kind: DateRangeKind| {
        store.dispatch(FilterAction::SetDateRange(kind));
    });
    let on_custom_change = Callback::new(move |(from, to): (String, String)| {
        let parsed_from = NaiveDate::parse_from_str(&from, "%Y-%m-%d");
        let parsed_to = NaiveDate::parse_from_str(&to, "%Y-%m-%d");
        // dispatch only once both bounds are complete dates
        if let (Ok(start), Ok(end)) = (parsed_from, parsed_to) {
            store.dispatch(FilterAction::SetCustomDateRange(start, end));
        }
    });

    let multi_selects: Vec<(
        &'static str,
        fn(&FilterOptions) -> Vec<FilterOption>,
        fn(&crate::shared::filters::state::FilterState) -> Vec<String>,
        fn(String) -> FilterAction,
    )> = vec![
        (
            "Categories",
            |o| o.categories.clone(),
            |s| s.categories.clone(),
            FilterAction::ToggleCategory,
        ),
        (
            "Order statuses",
            |o| o.order_statuses.clone(),
            |s| s.order_statuses.clone(),
            |id| FilterAction::ToggleStatus(StatusKind::Order, id),
        ),
        (
            "Expense statuses",
            |o| o.expense_statuses.clone(),
            |s| s.expense_statuses.clone(),
            |id| FilterAction::ToggleStatus(StatusKind::Expense, id),
        ),
        (
            "Invoice statuses",
            |o| o.invoice_statuses.clone(),
            |s| s.invoice_statuses.clone(),
            |id| FilterAction::ToggleStatus(StatusKind::Invoice, id),
        ),
        (
            "Task statuses",
            |o| o.task_statuses.clone(),
            |s| s.task_statuses.clone(),
            |id| FilterAction::ToggleStatus(StatusKind::Task, id),
        ),
        (
            "Branches",
            |o| o.branches.clone(),
            |s| s.branches.clone(),
            FilterAction::ToggleBranch,
        ),
        (
            "Payment methods",
            |o| o.payment_methods.clone(),
            |s| s.payment_methods.clone(),
            FilterAction::TogglePaymentMethod,
        ),
        (
            "Lead sources",
            |o| o.lead_sources.clone(),
            |s| s.lead_sources.clone(),
            FilterAction::ToggleLeadSource,
        ),
        (
            "Task priorities",
            |o| o.task_priorities.clone(),
            |s| s.task_priorities.clone(),
            FilterAction::ToggleTaskPriority,
        ),
    ];

    let chips = move || {
        state.with(|s| {
            let mut tags: Vec<(String, FilterAction)> = Vec::new();

            if s.date_range == DateRangeKind::CustomRange {
                if let (Some(start), Some(end)) = (s.custom_start, s.custom_end) {
                    tags.push((
                        format!("Period: {} — {}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d")),
                        FilterAction::SetDateRange(DateRangeKind::default()),
                    ));
                }
            } else if s.date_range != DateRangeKind::default() {
                tags.push((
                    format!("Period: {}", kind_label(s.date_range)),
                    FilterAction::SetDateRange(DateRangeKind::default()),
                ));
            }

            let lists: [(&str, &Vec<String>, FilterAction); 9] = [
                ("Categories", &s.categories, FilterAction::SetCategories(vec![])),
                (
                    "Order statuses",
                    &s.order_statuses,
                    FilterAction::SetStatuses(StatusKind::Order, vec![]),
                ),
                (
                    "Expense statuses",
                    &s.expense_statuses,
                    FilterAction::SetStatuses(StatusKind::Expense, vec![]),
                ),
                (
                    "Invoice statuses",
                    &s.invoice_statuses,
                    FilterAction::SetStatuses(StatusKind::Invoice, vec![]),
                ),
                (
                    "Task statuses",
                    &s.task_statuses,
                    FilterAction::SetStatuses(StatusKind::Task, vec![]),
                ),
                ("Branches", &s.branches, FilterAction::SetBranches(vec![])),
                (
                    "Payment methods",
                    &s.payment_methods,
                    FilterAction::SetPaymentMethods(vec![]),
                ),
                (
                    "Lead sources",
                    &s.lead_sources,
                    FilterAction::SetLeadSources(vec![]),
                ),
                (
                    "Task priorities",
                    &s.task_priorities,
                    FilterAction::SetTaskPriorities(vec![]),
                ),
            ];
            for (label, list, clear) in lists {
                if !list.is_empty() {
                    tags.push((format!("{} ({})", label, list.len()), clear));
                }
            }

            if !s.search.trim().is_empty() {
                tags.push((
                    format!("Search: \"{}\"", s.search.trim()),
                    FilterAction::SetSearch(String::new()),
                ));
            }

            tags
        })
    };

    view! {
        <div class="page filtered-overview">
            <div class="page__header">
                <h2 class="page__title">"Overview"</h2>
                <Flex align=FlexAlign::Center gap=FlexGap::Small>
                    <Label>"Branch"</Label>
                    <select
                        class="filtered-overview__branch"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            branch_id.set(if value.is_empty() { None } else { Some(value) });
                        }
                    >
                        <option value="">"All branches"</option>
                        <For
                            each=move || options.get().branches
                            key=|branch| branch.id.clone()
                            children=move |branch: FilterOption| {
                                view! {
                                    <option value=branch.id.clone()>{branch.label.clone()}</option>
                                }
                            }
                        />
                    </select>
                    <Button
                        appearance=ButtonAppearance::Primary
                        size=ButtonSize::Small
                        on_click=on_apply_click
                    >
                        "Apply"
                    </Button>
                </Flex>
            </div>

            {move || state.with(|s| s.options_error.clone()).map(|msg| view! {
                <div class="alert alert--warning">
                    "Reference data unavailable: " {msg}
                </div>
            })}

            <FilterPanel
                store=store
                filter_content=ChildrenFn::to_children(move || {
                    let multi_selects = multi_selects.clone();
                    view! {
                    <Flex vertical=true gap=FlexGap::Medium>
                        <DateRangeSelect
                            kind=Signal::derive(move || state.with(|s| s.date_range))
                            custom_start=Signal::derive(move || {
                                state.with(|s| date_value(s.custom_start))
                            })
                            custom_end=Signal::derive(move || {
                                state.with(|s| date_value(s.custom_end))
                            })
                            on_kind_change=on_kind_change
                            on_custom_change=on_custom_change
                            label="Period".to_string()
                        />

                        <Flex align=FlexAlign::Center gap=FlexGap::Small>
                            <Label>"Search"</Label>
                            <input
                                type="text"
                                class="filtered-overview__search"
                                placeholder="Search..."
                                prop:value=move || state.with(|s| s.search.clone())
                                on:input=move |ev| {
                                    store.dispatch(FilterAction::SetSearch(event_target_value(&ev)));
                                }
                            />
                        </Flex>

                        <div class="filtered-overview__multi-selects">
                            {multi_selects
                                .iter()
                                .map(|(label, pick_options, pick_selected, toggle)| {
                                    let pick_options = *pick_options;
                                    let pick_selected = *pick_selected;
                                    let toggle = *toggle;
                                    view! {
                                        <MultiSelectFilter
                                            label=label.to_string()
                                            options=Signal::derive(move || {
                                                pick_options(&options.get())
                                            })
                                            selected=Signal::derive(move || {
                                                state.with(|s| pick_selected(s))
                                            })
                                            on_toggle=Callback::new(move |id: String| {
                                                store.dispatch(toggle(id));
                                            })
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Flex>
                }})
                filter_tags=ChildrenFn::to_children(move || view! {
                    <div class="filter-tags">
                        {chips()
                            .into_iter()
                            .map(|(label, action)| {
                                view! {
                                    <FilterTag
                                        label=label
                                        on_remove=Callback::new(move |_| {
                                            store.dispatch(action.clone());
                                        })
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                })
            />

            {move || state.with(|s| s.data_error.clone()).map(|msg| view! {
                <div class="alert alert--error">
                    "Apply failed: " {msg}
                </div>
            })}

            {move || {
                if state.with(|s| s.data_loading) {
                    Some(view! {
                        <div class="filtered-overview__loading">"Applying filters..."</div>
                    }.into_any())
                } else {
                    None
                }
            }}

            {move || {
                state.with(|s| s.filtered_data.clone()).map(|data| {
                    let pretty = serde_json::to_string_pretty(&data)
                        .unwrap_or_else(|_| data.to_string());
                    view! {
                        <pre class="filtered-overview__result">{pretty}</pre>
                    }
                })
            }}
        </div>
    }
}
