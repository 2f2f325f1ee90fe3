//! Column-type normalization from Sea-ORM entity metadata.
//!
//! [`describe_entity`] seeds a [`ModelSchemaBuilder`] with one registered
//! column per entity column, its kind derived from the declared
//! `ColumnType`. Associations, virtual fields and translations are not
//! derivable from column metadata and are registered on the returned
//! builder by the caller.

use sea_orm::{ColumnTrait, ColumnType, EntityName, EntityTrait, IdenStatic, Iterable};

use super::{FieldKind, ModelSchema, ModelSchemaBuilder};

/// Normalize a storage column type into a [`FieldKind`].
///
/// Unsupported or custom storage types map to [`FieldKind::Unknown`], which
/// the filter builder rejects with `UnsupportedFieldKind`.
#[must_use]
pub fn kind_for_column_type(column_type: &ColumnType) -> FieldKind {
    match column_type {
        ColumnType::Char(_) | ColumnType::String(_) => FieldKind::String,
        ColumnType::Text => FieldKind::Text,
        ColumnType::TinyInteger
        | ColumnType::SmallInteger
        | ColumnType::Integer
        | ColumnType::BigInteger
        | ColumnType::TinyUnsigned
        | ColumnType::SmallUnsigned
        | ColumnType::Unsigned
        | ColumnType::BigUnsigned
        | ColumnType::Year => FieldKind::Integer,
        ColumnType::Float | ColumnType::Double => FieldKind::Number,
        ColumnType::Decimal(_) | ColumnType::Money(_) => FieldKind::Decimal,
        ColumnType::Date => FieldKind::Date,
        ColumnType::DateTime | ColumnType::Timestamp | ColumnType::TimestampWithTimeZone => {
            FieldKind::DateTime
        }
        ColumnType::Boolean => FieldKind::Boolean,
        _ => FieldKind::Unknown,
    }
}

/// Seed a schema builder from an entity's table name and column metadata.
#[must_use]
pub fn describe_entity<E: EntityTrait>() -> ModelSchemaBuilder {
    let mut builder = ModelSchema::builder(E::default().table_name());
    for column in E::Column::iter() {
        let kind = kind_for_column_type(column.def().get_column_type());
        builder = builder.column(column.as_str(), kind);
    }
    builder
}
