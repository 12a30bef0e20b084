use contracts::shared::filters::DateRangeKind;
use leptos::prelude::*;
use thaw::*;

/// Display label for a range kind
pub fn kind_label(kind: DateRangeKind) -> &'static str {
    match kind {
        DateRangeKind::Today => "Today",
        DateRangeKind::Yesterday => "Yesterday",
        DateRangeKind::Last7Days => "Last 7 days",
        DateRangeKind::Last30Days => "Last 30 days",
        DateRangeKind::ThisMonth => "This month",
        DateRangeKind::LastMonth => "Last month",
        DateRangeKind::ThisMonthLastYear => "This month last year",
        DateRangeKind::ThisYear => "This year",
        DateRangeKind::LastYear => "Last year",
        DateRangeKind::CurrentFinancialYear => "Current financial year",
        DateRangeKind::LastFinancialYear => "Last financial year",
        DateRangeKind::CustomRange => "Custom range",
    }
}

fn kind_from_value(value: &str) -> Option<DateRangeKind> {
    DateRangeKind::all()
        .iter()
        .copied()
        .find(|kind| kind.as_str() == value)
}

/// DateRangeSelect component - symbolic range dropdown plus custom bounds
///
/// The two date inputs are only shown for the custom range; changing the
/// dropdown away from it is expected to clear the custom bounds upstream.
#[component]
pub fn DateRangeSelect(
    /// Currently selected range kind
    #[prop(into)]
    kind: Signal<DateRangeKind>,

    /// Custom start date in yyyy-mm-dd format (empty when unset)
    #[prop(into)]
    custom_start: Signal<String>,

    /// Custom end date in yyyy-mm-dd format (empty when unset)
    #[prop(into)]
    custom_end: Signal<String>,

    /// Callback when a symbolic kind is picked
    on_kind_change: Callback<DateRangeKind>,

    /// Callback when either custom bound changes (start, end)
    on_custom_change: Callback<(String, String)>,

    /// Optional label above the control
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    let on_select = move |ev| {
        let value = event_target_value(&ev);
        if let Some(selected) = kind_from_value(&value) {
            on_kind_change.run(selected);
        }
    };

    let on_start_input = {
        let on_custom_change = on_custom_change.clone();
        move |ev| {
            let new_start = event_target_value(&ev);
            let current_end = custom_end.get_untracked();
            on_custom_change.run((new_start, current_end));
        }
    };

    let on_end_input = move |ev| {
        let new_end = event_target_value(&ev);
        let current_start = custom_start.get_untracked();
        on_custom_change.run((current_start, new_end));
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small class="date-range-select">
            {label.map(|l| view! {
                <Label>{l}</Label>
            })}

            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                <select
                    class="date-range-select__kind"
                    prop:value=move || kind.get().as_str().to_string()
                    on:change=on_select
                >
                    {DateRangeKind::all()
                        .iter()
                        .map(|k| {
                            view! {
                                <option
                                    value=k.as_str()
                                    selected=move || kind.get() == *k
                                >
                                    {kind_label(*k)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>

                {move || {
                    if kind.get() == DateRangeKind::CustomRange {
                        view! {
                            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                                <input
                                    type="date"
                                    prop:value=custom_start
                                    on:input=on_start_input.clone()
                                />
                                <div>"—"</div>
                                <input
                                    type="date"
                                    prop:value=custom_end
                                    on:input=on_end_input.clone()
                                />
                            </Flex>
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </Flex>
        </Flex>
    }
}
