use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::prelude::*;

pub mod blog;

pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateBlogTables)]
    }
}

pub struct CreateBlogTables;

impl MigrationName for CreateBlogTables {
    fn name(&self) -> &'static str {
        "m20240101_000001_create_blog_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateBlogTables {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Authors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Authors::Id).big_integer().not_null().primary_key())
                    .col(ColumnDef::new(Authors::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Articles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Articles::Id).big_integer().not_null().primary_key())
                    .col(ColumnDef::new(Articles::Title).string().not_null())
                    .col(ColumnDef::new(Articles::Body).text())
                    .col(ColumnDef::new(Articles::Published).boolean().not_null())
                    .col(ColumnDef::new(Articles::Rating).double())
                    .col(ColumnDef::new(Articles::Views).big_integer().not_null())
                    .col(ColumnDef::new(Articles::PublishedOn).date())
                    .col(ColumnDef::new(Articles::CreatedAt).date_time())
                    .col(ColumnDef::new(Articles::Position).big_integer().not_null())
                    .col(ColumnDef::new(Articles::AuthorId).big_integer())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ArticleDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ArticleDetails::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ArticleDetails::ArticleId).big_integer().not_null())
                    .col(ColumnDef::new(ArticleDetails::Notes).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ArticleTranslations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ArticleTranslations::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ArticleTranslations::ArticleId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ArticleTranslations::Locale).string().not_null())
                    .col(ColumnDef::new(ArticleTranslations::Summary).string().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArticleTranslations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ArticleDetails::Table).to_owned())
            .await?;
        manager.drop_table(Table::drop().table(Articles::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Authors::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Articles {
    Table,
    Id,
    Title,
    Body,
    Published,
    Rating,
    Views,
    PublishedOn,
    CreatedAt,
    Position,
    AuthorId,
}

#[derive(DeriveIden)]
enum Authors {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum ArticleDetails {
    Table,
    Id,
    ArticleId,
    Notes,
}

#[derive(DeriveIden)]
enum ArticleTranslations {
    Table,
    Id,
    ArticleId,
    Locale,
    Summary,
}
