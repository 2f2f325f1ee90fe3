//! # Filtering & Query Planning
//!
//! Translates user-supplied filter parameters into safely-parameterized
//! Sea-ORM conditions, driven by each model's registered schema.
//!
//! ## Pipeline
//!
//! 1. Parse the raw `filters` JSON object into an ordered [`FilterSet`]
//!    (value shapes inferred per entry: scalar, `from`/`to` range, or list).
//! 2. [`build_filter_plan`] dispatches on each field's registered kind and
//!    produces a [`FilterPlan`]: a bound-value `Condition`, relations to
//!    join, and in-memory predicates for virtual fields.
//! 3. The caller applies the plan to a `Select`, executes, then applies the
//!    in-memory predicates to the materialized rows.
//!
//! ## Filter value shapes
//!
//! ```json
//! {
//!   "title": "rust",
//!   "published": "true",
//!   "views": {"from": "10", "to": "100"},
//!   "created_at": {"from": "2024-01-01", "to": "2024-01-31"},
//!   "author": ["1", "2"]
//! }
//! ```
//!
//! Association filters take id lists, validated as strictly numeric and
//! bound as parameters. Text filters match by substring, accent-insensitive
//! where the backend supports it (see [`MatchStrategy`]).

pub mod conditions;
pub mod pagination;
pub mod plan;
pub mod search;
pub mod sort;
pub mod value;

pub use conditions::{build_filter_plan, truthy};
pub use pagination::{Page, calculate_content_range, page_bounds, paginate_vec};
pub use plan::{FilterPlan, VirtualPredicate};
pub use search::MatchStrategy;
pub use sort::{SortDirection, find_column, parse_direction, sort_in_memory};
pub use value::{FilterSet, FilterValue};
