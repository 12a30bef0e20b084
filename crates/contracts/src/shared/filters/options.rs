use serde::{Deserialize, Serialize};

/// Single selectable reference value (category, branch, status, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Stable identifier used in filter selections and payloads
    pub id: String,
    /// Display label for the UI
    pub label: String,
}

impl FilterOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Reference-data snapshot returned by the options endpoint.
///
/// Every list defaults to empty so a partial response from the backend
/// still deserializes; the UI renders missing vocabularies as empty
/// multi-selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterOptions {
    #[serde(default)]
    pub categories: Vec<FilterOption>,
    #[serde(default)]
    pub order_statuses: Vec<FilterOption>,
    #[serde(default)]
    pub expense_statuses: Vec<FilterOption>,
    #[serde(default)]
    pub invoice_statuses: Vec<FilterOption>,
    #[serde(default)]
    pub task_statuses: Vec<FilterOption>,
    #[serde(default)]
    pub branches: Vec<FilterOption>,
    #[serde(default)]
    pub payment_methods: Vec<FilterOption>,
    #[serde(default)]
    pub lead_sources: Vec<FilterOption>,
    #[serde(default)]
    pub task_priorities: Vec<FilterOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_response_deserializes() {
        let json = r#"{"categories":[{"id":"3","label":"Hardware"}]}"#;
        let options: FilterOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.categories.len(), 1);
        assert_eq!(options.categories[0].id, "3");
        assert!(options.branches.is_empty());
        assert!(options.task_priorities.is_empty());
    }
}
