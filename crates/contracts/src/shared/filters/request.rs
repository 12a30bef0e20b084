use serde::{Deserialize, Serialize};

use super::date_range::DateRangeKind;

/// Canonical apply-filters payload.
///
/// This is the fixed wire shape POSTed to the apply endpoint; field names
/// are part of the backend contract and independent of frontend state
/// naming. Dates are `YYYY-MM-DD`, both bounds inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyFiltersRequest {
    pub date_range: DateRangeKind,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub order_statuses: Vec<String>,
    #[serde(default)]
    pub expense_statuses: Vec<String>,
    #[serde(default)]
    pub invoice_statuses: Vec<String>,
    #[serde(default)]
    pub task_statuses: Vec<String>,
    #[serde(default)]
    pub branches: Vec<String>,
    #[serde(default)]
    pub payment_methods: Vec<String>,
    #[serde(default)]
    pub lead_sources: Vec<String>,
    #[serde(default)]
    pub task_priorities: Vec<String>,
    #[serde(default)]
    pub search: String,
}
