//! # Filter Query Builder
//!
//! Turns an ordered [`FilterSet`] into a [`FilterPlan`] by dispatching on
//! each field's [`FieldKind`]. Association filters validate and bind id
//! lists, temporal and numeric filters parse their bounds, text filters
//! match by substring through the selected [`MatchStrategy`], and virtual
//! fields defer to in-memory predicates. Translated attributes route
//! through the model's locale-scoped translation relation.
//!
//! All user-supplied values reach the storage layer as bound values; the
//! builder rejects anything it cannot classify before a query is composed.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sea_orm::Condition;
use sea_orm::sea_query::{Alias, Expr, SimpleExpr};

use crate::config::AdminConfig;
use crate::errors::FilterError;
use crate::schema::{FieldDescriptor, FieldKind, ModelSchema};

use super::plan::{FilterPlan, VirtualPredicate};
use super::search::MatchStrategy;
use super::value::{FilterSet, FilterValue};

/// Apply a filter set to a model schema, producing the storage-side
/// condition and the deferred in-memory predicates.
///
/// Entries are processed in insertion order; blank values are skipped.
///
/// # Errors
///
/// Returns a [`FilterError`] when a field is unknown to the schema, its
/// kind has no filter strategy, the value shape does not match the kind, or
/// an association id list contains a non-numeric token. No partial plan is
/// returned: the first offending entry aborts the build.
pub fn build_filter_plan(
    schema: &ModelSchema,
    filters: &FilterSet,
    strategy: MatchStrategy,
    config: &AdminConfig,
) -> Result<FilterPlan, FilterError> {
    let mut plan = FilterPlan::default();

    for (name, value) in filters.iter() {
        if value.is_blank() {
            continue;
        }
        let descriptor = schema
            .field(name)
            .ok_or_else(|| FilterError::UnknownField { field: name.to_string() })?;

        if descriptor.is_virtual && !descriptor.kind.is_textual() {
            // Only textual virtual fields have an in-memory strategy.
            return Err(FilterError::UnsupportedFieldKind {
                field: name.to_string(),
                kind: descriptor.kind,
            });
        }

        if descriptor.is_translated {
            route_through_translations(schema, config, &mut plan);
        }

        match descriptor.kind {
            FieldKind::BelongsTo => {
                let ids = numeric_id_list(name, value)?;
                let fk_column = format!("{name}_id");
                plan.condition = plan
                    .condition
                    .add(Expr::col((Alias::new(schema.table()), Alias::new(fk_column))).is_in(ids));
                plan.eager_loads.push(name.to_string());
            }
            FieldKind::HasOne => {
                let ids = numeric_id_list(name, value)?;
                let target = descriptor.target_table.as_deref().ok_or_else(|| {
                    FilterError::UnsupportedFieldKind {
                        field: name.to_string(),
                        kind: descriptor.kind,
                    }
                })?;
                plan.condition = plan
                    .condition
                    .add(Expr::col((Alias::new(target), Alias::new("id"))).is_in(ids));
                plan.eager_loads.push(name.to_string());
            }
            FieldKind::String | FieldKind::Text => {
                let query = scalar_value(name, value)?;
                if descriptor.is_virtual {
                    plan.in_memory.push(VirtualPredicate::new(name, query));
                } else {
                    let column = qualified_column(schema, descriptor);
                    plan.condition = plan
                        .condition
                        .add(strategy.substring_condition(column, query.trim()));
                }
            }
            FieldKind::Date => {
                let column = qualified_column(schema, descriptor);
                plan.condition = plan.condition.add(date_condition(name, value, column)?);
            }
            FieldKind::DateTime => {
                let column = qualified_column(schema, descriptor);
                plan.condition = plan.condition.add(datetime_condition(name, value, column)?);
            }
            FieldKind::Decimal | FieldKind::Number => {
                let column = qualified_column(schema, descriptor);
                plan.condition = plan.condition.add(float_condition(name, value, column)?);
            }
            FieldKind::Integer => {
                let column = qualified_column(schema, descriptor);
                plan.condition = plan.condition.add(integer_condition(name, value, column)?);
            }
            FieldKind::Boolean => {
                let query = scalar_value(name, value)?;
                let column = qualified_column(schema, descriptor);
                plan.condition = plan.condition.add(Expr::expr(column).eq(truthy(query)));
            }
            FieldKind::HasMany | FieldKind::Unknown => {
                return Err(FilterError::UnsupportedFieldKind {
                    field: name.to_string(),
                    kind: descriptor.kind,
                });
            }
        }
    }

    Ok(plan)
}

/// Coerce a scalar string to a boolean.
///
/// Accepted truthy tokens are `true`, `1`, `t` and `yes`, case-insensitive;
/// everything else is false.
#[must_use]
pub fn truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "t" | "yes"
    )
}

fn route_through_translations(schema: &ModelSchema, config: &AdminConfig, plan: &mut FilterPlan) {
    if plan.wants_translations {
        return;
    }
    if let Some(spec) = schema.translations() {
        plan.wants_translations = true;
        plan.condition = plan.condition.clone().add(
            Expr::col((Alias::new(&spec.relation), Alias::new(&spec.locale_column)))
                .eq(config.locale.as_str()),
        );
    }
}

fn qualified_column(schema: &ModelSchema, descriptor: &FieldDescriptor) -> SimpleExpr {
    let table = match (descriptor.is_translated, schema.translations()) {
        (true, Some(spec)) => spec.relation.as_str(),
        _ => schema.table(),
    };
    Expr::col((Alias::new(table), Alias::new(&descriptor.name))).into()
}

fn scalar_value<'v>(field: &str, value: &'v FilterValue) -> Result<&'v str, FilterError> {
    match value {
        FilterValue::Scalar(s) => Ok(s),
        _ => Err(FilterError::InvalidFilterShape {
            field: field.to_string(),
            expected: "a single value",
        }),
    }
}

fn numeric_id_list(field: &str, value: &FilterValue) -> Result<Vec<i64>, FilterError> {
    let FilterValue::List(tokens) = value else {
        return Err(FilterError::InvalidFilterShape {
            field: field.to_string(),
            expected: "a list of ids",
        });
    };
    tokens
        .iter()
        .map(|token| {
            token.trim().parse::<i64>().map_err(|_| FilterError::InvalidIdentifier {
                field: field.to_string(),
                token: token.clone(),
            })
        })
        .collect()
}

fn parse_day(field: &str, raw: &str) -> Result<NaiveDate, FilterError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| FilterError::InvalidFilterShape {
        field: field.to_string(),
        expected: "an ISO-8601 date",
    })
}

fn parse_instant(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN))
}

fn date_condition(
    field: &str,
    value: &FilterValue,
    column: SimpleExpr,
) -> Result<Condition, FilterError> {
    match value {
        FilterValue::Scalar(raw) => {
            Ok(Condition::all().add(Expr::expr(column).eq(parse_day(field, raw)?)))
        }
        FilterValue::Range { from, to } => {
            let from = from.as_deref().map(|raw| parse_day(field, raw)).transpose()?;
            let to = to.as_deref().map(|raw| parse_day(field, raw)).transpose()?;
            // A range naming a single day collapses to day equality.
            if let (Some(lower), Some(upper)) = (from, to)
                && lower == upper
            {
                return Ok(Condition::all().add(Expr::expr(column).eq(lower)));
            }
            let mut bounds = Condition::all();
            if let Some(lower) = from {
                bounds = bounds.add(Expr::expr(column.clone()).gte(lower));
            }
            if let Some(upper) = to {
                bounds = bounds.add(Expr::expr(column).lte(upper));
            }
            Ok(bounds)
        }
        FilterValue::List(_) => Err(FilterError::InvalidFilterShape {
            field: field.to_string(),
            expected: "a date or a from/to range",
        }),
    }
}

fn datetime_condition(
    field: &str,
    value: &FilterValue,
    column: SimpleExpr,
) -> Result<Condition, FilterError> {
    match value {
        FilterValue::Scalar(raw) => {
            if let Some(instant) = parse_instant(raw) {
                return Ok(Condition::all().add(Expr::expr(column).eq(instant)));
            }
            // A bare date selects the whole day.
            let day = parse_day(field, raw)?;
            Ok(day_window(column, day))
        }
        FilterValue::Range { from, to } => {
            let from = from.as_deref().map(|raw| datetime_bound(field, raw, false)).transpose()?;
            let to = to.as_deref().map(|raw| datetime_bound(field, raw, true)).transpose()?;
            if let (Some(lower), Some(upper)) = (from, to)
                && lower.date() == upper.date()
            {
                return Ok(day_window(column, lower.date()));
            }
            let mut bounds = Condition::all();
            if let Some(lower) = from {
                bounds = bounds.add(Expr::expr(column.clone()).gte(lower));
            }
            if let Some(upper) = to {
                bounds = bounds.add(Expr::expr(column).lte(upper));
            }
            Ok(bounds)
        }
        FilterValue::List(_) => Err(FilterError::InvalidFilterShape {
            field: field.to_string(),
            expected: "a datetime or a from/to range",
        }),
    }
}

/// Expand a range bound into a timestamp. Date-only bounds snap to the day
/// boundary so the range stays inclusive on both sides.
fn datetime_bound(field: &str, raw: &str, upper: bool) -> Result<NaiveDateTime, FilterError> {
    if let Some(instant) = parse_instant(raw) {
        return Ok(instant);
    }
    let day = parse_day(field, raw)?;
    Ok(if upper { end_of_day(day) } else { start_of_day(day) })
}

fn day_window(column: SimpleExpr, day: NaiveDate) -> Condition {
    Condition::all()
        .add(Expr::expr(column.clone()).gte(start_of_day(day)))
        .add(Expr::expr(column).lte(end_of_day(day)))
}

fn float_condition(
    field: &str,
    value: &FilterValue,
    column: SimpleExpr,
) -> Result<Condition, FilterError> {
    let parse = |raw: &str| -> Result<f64, FilterError> {
        raw.trim().parse::<f64>().map_err(|_| FilterError::InvalidFilterShape {
            field: field.to_string(),
            expected: "a numeric value",
        })
    };
    numeric_condition(field, value, column, parse)
}

fn integer_condition(
    field: &str,
    value: &FilterValue,
    column: SimpleExpr,
) -> Result<Condition, FilterError> {
    let parse = |raw: &str| -> Result<i64, FilterError> {
        raw.trim().parse::<i64>().map_err(|_| FilterError::InvalidFilterShape {
            field: field.to_string(),
            expected: "an integer value",
        })
    };
    numeric_condition(field, value, column, parse)
}

fn numeric_condition<V>(
    field: &str,
    value: &FilterValue,
    column: SimpleExpr,
    parse: impl Fn(&str) -> Result<V, FilterError>,
) -> Result<Condition, FilterError>
where
    V: Into<sea_orm::Value>,
{
    match value {
        FilterValue::Scalar(raw) => Ok(Condition::all().add(Expr::expr(column).eq(parse(raw)?))),
        FilterValue::Range { from, to } => {
            let from = from.as_deref().map(&parse).transpose()?;
            let to = to.as_deref().map(&parse).transpose()?;
            let mut bounds = Condition::all();
            if let Some(lower) = from {
                bounds = bounds.add(Expr::expr(column.clone()).gte(lower));
            }
            if let Some(upper) = to {
                bounds = bounds.add(Expr::expr(column).lte(upper));
            }
            Ok(bounds)
        }
        FilterValue::List(_) => Err(FilterError::InvalidFilterShape {
            field: field.to_string(),
            expected: "a number or a from/to range",
        }),
    }
}
