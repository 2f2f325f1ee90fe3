use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::errors::AdminError;
use crate::filtering::FilterSet;

/// Query parameters for listing and export endpoints.
///
/// # Filtering
/// The `filters` parameter accepts a JSON-encoded object mapping field
/// names to values; the value shape selects the filter form:
/// - **Substring match on a text field:** `{"title": "rust"}`
/// - **Range on a date or numeric field:** `{"created_at": {"from": "2024-01-01", "to": "2024-01-31"}}`
/// - **Association id membership:** `{"author": ["1", "2"]}`
/// - **Boolean:** `{"published": "true"}`
///
/// Keys are processed in document order.
///
/// # Ordering
/// `order_field` names a sortable column; `order` must be `asc` or `desc`
/// (case-insensitive); any other value disables ordering.
///
/// # Pagination
/// `page` is 1-based; `per` falls back to the configured default.
#[derive(Debug, Deserialize, IntoParams, ToSchema, Default)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// JSON-encoded filters object.
    #[param(example = json!({
        "title": "rust",
        "created_at": {"from": "2024-01-01", "to": "2024-01-31"},
        "author": ["1", "2"]
    }))]
    pub filters: Option<String>,
    /// 1-based page number.
    #[param(example = 1)]
    pub page: Option<u64>,
    /// Items per page.
    #[param(example = 20)]
    pub per: Option<u64>,
    /// Column to order by.
    #[param(example = "id")]
    pub order_field: Option<String>,
    /// Direction: `asc` or `desc`.
    #[param(example = "desc")]
    pub order: Option<String>,
}

impl ListParams {
    /// Parse the `filters` parameter into an ordered [`FilterSet`].
    ///
    /// # Errors
    ///
    /// Returns `AdminError::BadRequest` when the parameter is not a JSON
    /// object.
    pub fn filter_set(&self) -> Result<FilterSet, AdminError> {
        let Some(raw) = self.filters.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(FilterSet::new());
        };
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| AdminError::bad_request(format!("malformed filters parameter: {e}")))?;
        FilterSet::from_json_object(&value)
            .ok_or_else(|| AdminError::bad_request("filters must be a JSON object"))
    }
}
