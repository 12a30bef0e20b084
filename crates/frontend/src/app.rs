use crate::dashboards::FilteredOverviewDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <FilteredOverviewDashboard />
    }
}
