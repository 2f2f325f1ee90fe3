//! # backoffice
//!
//! Traits and functions for building admin back-office layers with Axum
//! and Sea-ORM: schema-driven filtering, ordering, pagination, CRUD
//! plumbing, drag-reorder persistence, and streaming CSV export.
//!
//! Models register a [`ModelSchema`] describing their columns,
//! associations, virtual accessors and translated attributes; the filter
//! builder turns user-supplied parameters into safely-parameterized
//! conditions plus in-memory predicates for virtual fields, and
//! [`operations::list`] runs the whole listing flow.

pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod filtering;
pub mod models;
pub mod schema;

pub use config::AdminConfig;
pub use crate::core::{AdminResource, MergeIntoActiveModel, operations};
pub use errors::{AdminError, FilterError};
pub use export::stream_csv;
pub use filtering::{
    FilterPlan, FilterSet, FilterValue, MatchStrategy, Page, SortDirection, build_filter_plan,
};
pub use models::ListParams;
pub use schema::{FieldDescriptor, FieldKind, ModelSchema, TranslationSpec};
