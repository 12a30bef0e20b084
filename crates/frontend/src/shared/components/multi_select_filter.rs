use contracts::shared::filters::FilterOption;
use leptos::prelude::*;
use thaw::*;

/// MultiSelectFilter component - checkbox list over one reference vocabulary
///
/// Renders whatever options are currently loaded; with no options loaded it
/// degrades to an empty-but-visible list, so a failed or pending options
/// fetch never blocks the rest of the panel.
#[component]
pub fn MultiSelectFilter(
    /// Group label ("Categories", "Branches", ...)
    #[prop(into)]
    label: String,

    /// Loaded reference options for this vocabulary
    #[prop(into)]
    options: Signal<Vec<FilterOption>>,

    /// Currently selected identifiers
    #[prop(into)]
    selected: Signal<Vec<String>>,

    /// Callback with the toggled identifier
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <Flex vertical=true gap=FlexGap::Small class="multi-select-filter">
            <Label>{label}</Label>
            <div class="multi-select-filter__list">
                <For
                    each=move || options.get()
                    key=|option| option.id.clone()
                    children=move |option: FilterOption| {
                        let id = option.id.clone();
                        let checked_id = option.id.clone();
                        let is_checked = move || {
                            selected.with(|ids| ids.iter().any(|s| *s == checked_id))
                        };
                        view! {
                            <label class="multi-select-filter__item">
                                <input
                                    type="checkbox"
                                    prop:checked=is_checked
                                    on:change=move |_| {
                                        on_toggle.run(id.clone());
                                    }
                                />
                                <span>{option.label.clone()}</span>
                            </label>
                        }
                    }
                />
            </div>
        </Flex>
    }
}
