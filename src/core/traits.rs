use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait, Select,
    entity::prelude::*,
};

use crate::schema::ModelSchema;

/// Merge an update model into an existing active model.
pub trait MergeIntoActiveModel<ActiveModelType> {
    /// # Errors
    ///
    /// Returns a `DbErr` if the merge fails due to data conversion issues.
    fn merge_into_activemodel(self, existing: ActiveModelType) -> Result<ActiveModelType, DbErr>;
}

/// Contract between an admin-managed model and the back-office layer.
///
/// Implementations register the model's [`ModelSchema`], expose which
/// columns are sortable, supply joins for association and translation
/// lookups, and surface virtual accessor values for in-memory filtering
/// and sorting. CRUD defaults cover the common cases; override them for
/// model-specific behavior.
#[async_trait]
pub trait AdminResource: Sized + Send + Sync
where
    Self::EntityType: EntityTrait + Sync,
    Self::ActiveModelType: ActiveModelTrait + ActiveModelBehavior + Send + Sync,
    <Self::EntityType as EntityTrait>::Model: Sync + IntoActiveModel<Self::ActiveModelType>,
    <<Self::EntityType as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i64>,
    Self: From<<Self::EntityType as EntityTrait>::Model>,
{
    type EntityType: EntityTrait + Sync;
    type ColumnType: ColumnTrait + Copy + std::fmt::Debug;
    type ActiveModelType: ActiveModelTrait<Entity = Self::EntityType>;
    type CreateModel: Into<Self::ActiveModelType> + Send;
    type UpdateModel: Send + Sync + MergeIntoActiveModel<Self::ActiveModelType>;

    const ID_COLUMN: Self::ColumnType;
    const RESOURCE_NAME_SINGULAR: &'static str;
    const RESOURCE_NAME_PLURAL: &'static str;

    /// The model's registered schema. Built once per model type; callers
    /// treat the result as immutable for the duration of a request.
    fn schema() -> ModelSchema;

    #[must_use]
    fn sortable_columns() -> Vec<(&'static str, Self::ColumnType)> {
        vec![("id", Self::ID_COLUMN)]
    }

    #[must_use]
    fn default_order_column() -> Self::ColumnType {
        Self::ID_COLUMN
    }

    /// Join the relation behind an association filter so its constraints
    /// can resolve. The default is a no-op; models with `has_one` or
    /// `belongs_to` filters override this to supply the join.
    #[must_use]
    fn join_related(
        select: Select<Self::EntityType>,
        relation: &str,
    ) -> Select<Self::EntityType> {
        let _ = relation;
        select
    }

    /// Join the locale-scoped translation relation. Models with translated
    /// attributes override this.
    #[must_use]
    fn join_translations(select: Select<Self::EntityType>) -> Select<Self::EntityType> {
        select
    }

    /// Value of a virtual (computed) field, used by in-memory filtering.
    #[must_use]
    fn virtual_value(&self, field: &str) -> Option<String> {
        let _ = field;
        None
    }

    /// Comparable value for in-memory ordering of materialized rows.
    /// Defaults to the virtual accessor.
    #[must_use]
    fn sort_value(&self, field: &str) -> Option<String> {
        self.virtual_value(field)
    }

    /// Column holding the position index for drag-reorder editing, when
    /// the model supports it.
    #[must_use]
    fn position_column() -> Option<Self::ColumnType> {
        None
    }

    /// Header row for delimited exports.
    #[must_use]
    fn export_columns() -> Vec<String> {
        Self::schema().column_names().iter().map(ToString::to_string).collect()
    }

    /// One exported record, aligned with [`Self::export_columns`].
    fn export_row(&self) -> Vec<String>;

    async fn get_one(db: &DatabaseConnection, id: i64) -> Result<Self, DbErr> {
        let model = Self::EntityType::find_by_id(
            <<Self::EntityType as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType::from(id),
        )
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound(format!(
            "{} not found",
            Self::RESOURCE_NAME_SINGULAR
        )))?;
        Ok(Self::from(model))
    }

    async fn create(
        db: &DatabaseConnection,
        create_model: Self::CreateModel,
    ) -> Result<Self, DbErr> {
        let active_model: Self::ActiveModelType = create_model.into();
        let model = active_model.insert(db).await?;
        Ok(Self::from(model))
    }

    async fn update(
        db: &DatabaseConnection,
        id: i64,
        update_model: Self::UpdateModel,
    ) -> Result<Self, DbErr> {
        let model = Self::EntityType::find_by_id(
            <<Self::EntityType as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType::from(id),
        )
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound(format!(
            "{} not found",
            Self::RESOURCE_NAME_SINGULAR
        )))?;
        let existing: Self::ActiveModelType = model.into_active_model();
        let merged = update_model.merge_into_activemodel(existing)?;
        let updated = merged.update(db).await?;
        Ok(Self::from(updated))
    }

    async fn delete(db: &DatabaseConnection, id: i64) -> Result<i64, DbErr> {
        let res = Self::EntityType::delete_by_id(
            <<Self::EntityType as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType::from(id),
        )
        .exec(db)
        .await?;
        match res.rows_affected {
            0 => Err(DbErr::RecordNotFound(format!(
                "{} not found",
                Self::RESOURCE_NAME_SINGULAR
            ))),
            _ => Ok(id),
        }
    }

    async fn delete_many(db: &DatabaseConnection, ids: Vec<i64>) -> Result<Vec<i64>, DbErr> {
        Self::EntityType::delete_many()
            .filter(Self::ID_COLUMN.is_in(ids.clone()))
            .exec(db)
            .await?;
        Ok(ids)
    }

    async fn total_count(
        db: &DatabaseConnection,
        select: Select<Self::EntityType>,
    ) -> Result<u64, DbErr> {
        PaginatorTrait::count(select, db).await
    }
}
