//! # Listing and Reorder Operations
//!
//! [`list`] is the request glue around the filter builder: build the plan,
//! apply joins and conditions to a `Select`, execute, then finish with the
//! in-memory predicates, ordering, and pagination. When no virtual filters
//! are present, ordering and slicing happen at the storage layer; otherwise
//! rows materialize first and the whole tail runs in memory.
//!
//! [`reorder`] persists drag-reorder position indexes from an ordered id
//! list.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
    sea_query::Expr,
};

use crate::config::AdminConfig;
use crate::errors::AdminError;
use crate::filtering::{
    FilterPlan, MatchStrategy, Page, build_filter_plan, find_column, page_bounds, paginate_vec,
    parse_direction, sort_in_memory,
};
use crate::models::ListParams;

use super::traits::AdminResource;

/// Compose the refined select for a resource from its filter plan.
///
/// Joins are supplied by the resource's hooks; results are de-duplicated
/// when a join could multiply rows.
#[must_use]
pub fn refined_select<T: AdminResource>(plan: &FilterPlan) -> Select<T::EntityType> {
    let mut select = T::EntityType::find();
    if plan.wants_translations {
        select = T::join_translations(select);
    }
    for relation in &plan.eager_loads {
        select = T::join_related(select, relation);
    }
    if plan.wants_translations || !plan.eager_loads.is_empty() {
        select = select.distinct();
    }
    select.filter(plan.condition.clone())
}

/// Run the full listing flow for a resource.
///
/// # Errors
///
/// Returns `AdminError::Filter` when the filter set is rejected, or a
/// database error from query execution.
pub async fn list<T: AdminResource>(
    db: &DatabaseConnection,
    params: &ListParams,
    config: &AdminConfig,
) -> Result<Page<T>, AdminError> {
    let filters = params.filter_set()?;
    let schema = T::schema();
    let strategy = MatchStrategy::for_backend(db.get_database_backend());
    let plan = build_filter_plan(&schema, &filters, strategy, config)?;

    let select = refined_select::<T>(&plan);
    let page = params.page.unwrap_or(1);
    let per_page = params.per.unwrap_or(config.default_per_page);
    let direction = params.order.as_deref().and_then(parse_direction);

    if plan.has_virtual_filters() {
        // Virtual predicates need materialized rows; ordering and slicing
        // then happen in memory as well.
        let rows: Vec<T> = select.all(db).await?.into_iter().map(T::from).collect();
        let mut rows = apply_virtual_predicates(rows, &plan);
        if let (Some(direction), Some(field)) = (direction, params.order_field.as_deref()) {
            sort_in_memory(&mut rows, field, direction);
        }
        return Ok(paginate_vec(rows, page, per_page));
    }

    let total = T::total_count(db, select.clone()).await?;
    let mut select = select;
    if let Some(direction) = direction {
        let field = params.order_field.as_deref().unwrap_or("id");
        let column = find_column(field, &T::sortable_columns(), T::default_order_column());
        select = select.order_by(column, direction.into());
    }
    let (offset, limit) = page_bounds(page, per_page);
    let models = select.offset(offset).limit(limit).all(db).await?;
    let items = models.into_iter().map(T::from).collect();
    Ok(Page { items, total, page, per_page })
}

/// Drop materialized rows that fail any virtual-field predicate.
#[must_use]
pub fn apply_virtual_predicates<T: AdminResource>(rows: Vec<T>, plan: &FilterPlan) -> Vec<T> {
    rows.into_iter()
        .filter(|row| {
            plan.in_memory.iter().all(|predicate| {
                predicate.matches(row.virtual_value(&predicate.field).as_deref())
            })
        })
        .collect()
}

/// Persist position indexes for an ordered id list.
///
/// # Errors
///
/// Returns `AdminError::BadRequest` when the model declares no position
/// column, or a database error from the updates.
pub async fn reorder<T: AdminResource>(
    db: &DatabaseConnection,
    ordered_ids: &[i64],
) -> Result<(), AdminError> {
    let Some(position_column) = T::position_column() else {
        return Err(AdminError::bad_request(format!(
            "{} cannot be reordered",
            T::RESOURCE_NAME_PLURAL
        )));
    };

    for (index, id) in ordered_ids.iter().enumerate() {
        T::EntityType::update_many()
            .col_expr(position_column, Expr::value(index as i64))
            .filter(T::ID_COLUMN.eq(*id))
            .exec(db)
            .await?;
    }
    Ok(())
}
