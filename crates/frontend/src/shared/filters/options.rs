use super::api;
use super::state::FilterAction;
use super::store::FilterStore;

/// Load the reference option lists for `branch_id` into the store.
///
/// Raises `options_loading` around the call. On failure the previously
/// loaded options stay in place (stale-but-available beats blanking the
/// multi-selects), the error is recorded in `options_error` and returned.
/// No automatic retry; the owning view decides how to react.
pub async fn load_filter_options(
    store: FilterStore,
    branch_id: Option<String>,
) -> Result<(), String> {
    store.dispatch(FilterAction::SetOptionsLoading(true));
    match api::get_filter_options(branch_id.as_deref()).await {
        Ok(options) => {
            store.dispatch(FilterAction::SetFilterOptions(options));
            Ok(())
        }
        Err(error) => {
            log::warn!("filter options load failed: {}", error);
            store.dispatch(FilterAction::SetOptionsError(error.clone()));
            Err(error)
        }
    }
}
