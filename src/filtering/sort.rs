//! Ordering for listings.
//!
//! Query-backed results order at the storage layer; materialized results
//! (the virtual-filter path) order in memory by the resource's accessor
//! value. Direction tokens other than `asc`/`desc` disable ordering.

use sea_orm::ColumnTrait;
use sea_orm::sea_query::Order;

use crate::core::traits::AdminResource;

/// Listing sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Self::Asc,
            SortDirection::Desc => Self::Desc,
        }
    }
}

/// Parse a direction token. Only `asc` and `desc` (case-insensitive) order
/// results; anything else yields `None`, disabling ordering.
#[must_use]
pub fn parse_direction(raw: &str) -> Option<SortDirection> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "asc" => Some(SortDirection::Asc),
        "desc" => Some(SortDirection::Desc),
        _ => None,
    }
}

/// Find a sortable column by name, falling back to the default.
#[must_use]
pub fn find_column<C>(column_name: &str, columns: &[(&str, C)], default: C) -> C
where
    C: ColumnTrait + Copy,
{
    columns
        .iter()
        .find(|&&(name, _)| name == column_name)
        .map_or(default, |&(_, column)| column)
}

/// Order materialized rows by a field's accessor value.
///
/// Values compare as strings; rows without a value sort last in either
/// direction.
pub fn sort_in_memory<T: AdminResource>(rows: &mut [T], field: &str, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let left = a.sort_value(field);
        let right = b.sort_value(field);
        match (left, right) {
            (Some(l), Some(r)) => match direction {
                SortDirection::Asc => l.cmp(&r),
                SortDirection::Desc => r.cmp(&l),
            },
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
    });
}
