use contracts::shared::filters::{ApplyFiltersRequest, FilterOptions};
use gloo_net::http::Request;
use serde_json::Value;

const BASE_URL: &str = "/api/dashboard";

fn with_branch(path: &str, branch_id: Option<&str>) -> String {
    match branch_id {
        Some(branch) => format!(
            "{}{}?branch_id={}",
            BASE_URL,
            path,
            urlencoding::encode(branch)
        ),
        None => format!("{}{}", BASE_URL, path),
    }
}

/// Fetch the reference option lists, optionally scoped to a branch
pub async fn get_filter_options(branch_id: Option<&str>) -> Result<FilterOptions, String> {
    Request::get(&with_branch("/filter-options", branch_id))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST the canonical filter payload; the response is opaque to the engine
pub async fn apply_filters(
    request: &ApplyFiltersRequest,
    branch_id: Option<&str>,
) -> Result<Value, String> {
    Request::post(&with_branch("/apply-filters", branch_id))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
