use serde::{Deserialize, Serialize};

/// Symbolic date range selectable in the dashboard filter panel.
///
/// Serialized in snake_case on the wire (`date_range` field of
/// [`super::request::ApplyFiltersRequest`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DateRangeKind {
    Today,
    Yesterday,
    #[serde(rename = "last_7_days")]
    Last7Days,
    #[default]
    #[serde(rename = "last_30_days")]
    Last30Days,
    ThisMonth,
    LastMonth,
    ThisMonthLastYear,
    ThisYear,
    LastYear,
    CurrentFinancialYear,
    LastFinancialYear,
    CustomRange,
}

impl DateRangeKind {
    /// Wire identifier, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DateRangeKind::Today => "today",
            DateRangeKind::Yesterday => "yesterday",
            DateRangeKind::Last7Days => "last_7_days",
            DateRangeKind::Last30Days => "last_30_days",
            DateRangeKind::ThisMonth => "this_month",
            DateRangeKind::LastMonth => "last_month",
            DateRangeKind::ThisMonthLastYear => "this_month_last_year",
            DateRangeKind::ThisYear => "this_year",
            DateRangeKind::LastYear => "last_year",
            DateRangeKind::CurrentFinancialYear => "current_financial_year",
            DateRangeKind::LastFinancialYear => "last_financial_year",
            DateRangeKind::CustomRange => "custom_range",
        }
    }

    /// All kinds in presentation order (used to populate the dropdown).
    pub fn all() -> &'static [DateRangeKind] {
        &[
            DateRangeKind::Today,
            DateRangeKind::Yesterday,
            DateRangeKind::Last7Days,
            DateRangeKind::Last30Days,
            DateRangeKind::ThisMonth,
            DateRangeKind::LastMonth,
            DateRangeKind::ThisMonthLastYear,
            DateRangeKind::ThisYear,
            DateRangeKind::LastYear,
            DateRangeKind::CurrentFinancialYear,
            DateRangeKind::LastFinancialYear,
            DateRangeKind::CustomRange,
        ]
    }
}
