//! Page slicing and the Content-Range response helper.

use axum::http::header::HeaderMap;
use serde::Serialize;

/// One page of listing results plus the unpaginated total.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total matching rows before slicing.
    pub total: u64,
    /// 1-based page number.
    pub page: u64,
    pub per_page: u64,
}

/// Offset/limit for a 1-based page number.
#[must_use]
pub fn page_bounds(page: u64, per_page: u64) -> (u64, u64) {
    (page.saturating_sub(1).saturating_mul(per_page), per_page)
}

/// Slice already-materialized rows into a page.
#[must_use]
pub fn paginate_vec<T>(rows: Vec<T>, page: u64, per_page: u64) -> Page<T> {
    let total = rows.len() as u64;
    let (offset, limit) = page_bounds(page, per_page);
    let items = rows
        .into_iter()
        .skip(usize::try_from(offset).unwrap_or(usize::MAX))
        .take(usize::try_from(limit).unwrap_or(usize::MAX))
        .collect();
    Page { items, total, page, per_page }
}

/// Remove control characters so a resource name cannot inject headers.
fn sanitize_resource_name(name: &str) -> String {
    name.chars().filter(|c| c.is_ascii() && !c.is_ascii_control()).collect()
}

/// Build a Content-Range header for a listing response.
#[must_use]
pub fn calculate_content_range(
    offset: u64,
    limit: u64,
    total_count: u64,
    resource_name: &str,
) -> HeaderMap {
    let max_offset_limit = (offset + limit).saturating_sub(1).min(total_count);
    let safe_name = sanitize_resource_name(resource_name);
    let content_range = format!("{safe_name} {offset}-{max_offset_limit}/{total_count}");

    let mut headers = HeaderMap::new();
    if let Ok(value) = content_range.parse() {
        headers.insert("Content-Range", value);
    } else if let Ok(value) =
        format!("items {offset}-{max_offset_limit}/{total_count}").parse()
    {
        headers.insert("Content-Range", value);
    }
    headers
}
