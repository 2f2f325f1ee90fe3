//! Filter plan support structures.
//!
//! The builder in [`super::conditions`] does not execute anything; it
//! produces a [`FilterPlan`] describing the storage-side condition, the
//! relations the caller must join, and the predicates that can only run in
//! memory against materialized rows.

use sea_orm::Condition;

/// The outcome of applying a filter set to a model schema.
#[derive(Debug, Clone)]
pub struct FilterPlan {
    /// Conjunction of all storage-side constraints, with bound values.
    pub condition: Condition,
    /// Association field names to eager-load/join, in filter order.
    pub eager_loads: Vec<String>,
    /// Whether the locale-scoped translation relation must be joined.
    pub wants_translations: bool,
    /// Predicates for virtual fields, applied after materialization.
    pub in_memory: Vec<VirtualPredicate>,
}

impl Default for FilterPlan {
    fn default() -> Self {
        Self {
            condition: Condition::all(),
            eager_loads: Vec::new(),
            wants_translations: false,
            in_memory: Vec::new(),
        }
    }
}

impl FilterPlan {
    /// Whether any post-materialization filtering is required.
    #[must_use]
    pub fn has_virtual_filters(&self) -> bool {
        !self.in_memory.is_empty()
    }
}

/// Case-insensitive substring test against a virtual accessor value.
///
/// Rows whose accessor yields no value, or an empty one, are excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualPredicate {
    /// Virtual field name, resolved via the resource's accessor.
    pub field: String,
    needle: String,
}

impl VirtualPredicate {
    #[must_use]
    pub fn new(field: impl Into<String>, query: &str) -> Self {
        Self {
            field: field.into(),
            needle: query.trim().to_lowercase(),
        }
    }

    /// Test an accessor value against the needle.
    #[must_use]
    pub fn matches(&self, value: Option<&str>) -> bool {
        match value {
            Some(v) if !v.is_empty() => v.to_lowercase().contains(&self.needle),
            _ => false,
        }
    }
}
