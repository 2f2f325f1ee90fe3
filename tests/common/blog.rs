//! Blog-shaped test fixtures: entities, migration, and the `Article`
//! admin resource used across the integration suites.

use backoffice::schema::introspect::describe_entity;
use backoffice::schema::{ModelSchema, TranslationSpec};
use backoffice::{AdminResource, MergeIntoActiveModel};
use sea_orm::entity::prelude::*;
use sea_orm::{DbErr, JoinType, QuerySelect, Select, Set};

pub mod article {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "articles")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i64,
        pub title: String,
        #[sea_orm(column_type = "Text", nullable)]
        pub body: Option<String>,
        pub published: bool,
        pub rating: Option<f64>,
        pub views: i64,
        pub published_on: Option<Date>,
        pub created_at: Option<DateTime>,
        pub position: i64,
        pub author_id: Option<i64>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::author::Entity",
            from = "Column::AuthorId",
            to = "super::author::Column::Id"
        )]
        Author,
        #[sea_orm(has_one = "super::detail::Entity")]
        Detail,
        #[sea_orm(has_many = "super::translation::Entity")]
        Translations,
    }

    impl Related<super::author::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Author.def()
        }
    }

    impl Related<super::detail::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Detail.def()
        }
    }

    impl Related<super::translation::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Translations.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod author {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "authors")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i64,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::article::Entity")]
        Articles,
    }

    impl Related<super::article::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Articles.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod detail {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "article_details")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i64,
        pub article_id: i64,
        pub notes: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::article::Entity",
            from = "Column::ArticleId",
            to = "super::article::Column::Id"
        )]
        Article,
    }

    impl Related<super::article::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Article.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod translation {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "article_translations")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i64,
        pub article_id: i64,
        pub locale: String,
        pub summary: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::article::Entity",
            from = "Column::ArticleId",
            to = "super::article::Column::Id"
        )]
        Article,
    }

    impl Related<super::article::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Article.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Admin-facing article model.
#[derive(Clone, Debug, PartialEq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub body: Option<String>,
    pub published: bool,
    pub rating: Option<f64>,
    pub views: i64,
    pub published_on: Option<chrono::NaiveDate>,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub position: i64,
    pub author_id: Option<i64>,
}

impl From<article::Model> for Article {
    fn from(model: article::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            body: model.body,
            published: model.published,
            rating: model.rating,
            views: model.views,
            published_on: model.published_on,
            created_at: model.created_at,
            position: model.position,
            author_id: model.author_id,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ArticleCreate {
    pub id: i64,
    pub title: String,
    pub body: Option<String>,
    pub published: bool,
    pub rating: Option<f64>,
    pub views: i64,
    pub published_on: Option<chrono::NaiveDate>,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub position: i64,
    pub author_id: Option<i64>,
}

impl From<ArticleCreate> for article::ActiveModel {
    fn from(create: ArticleCreate) -> Self {
        Self {
            id: Set(create.id),
            title: Set(create.title),
            body: Set(create.body),
            published: Set(create.published),
            rating: Set(create.rating),
            views: Set(create.views),
            published_on: Set(create.published_on),
            created_at: Set(create.created_at),
            position: Set(create.position),
            author_id: Set(create.author_id),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ArticleUpdate {
    pub title: Option<String>,
    pub published: Option<bool>,
    pub views: Option<i64>,
}

impl MergeIntoActiveModel<article::ActiveModel> for ArticleUpdate {
    fn merge_into_activemodel(
        self,
        mut existing: article::ActiveModel,
    ) -> Result<article::ActiveModel, DbErr> {
        if let Some(title) = self.title {
            existing.title = Set(title);
        }
        if let Some(published) = self.published {
            existing.published = Set(published);
        }
        if let Some(views) = self.views {
            existing.views = Set(views);
        }
        Ok(existing)
    }
}

#[async_trait::async_trait]
impl AdminResource for Article {
    type EntityType = article::Entity;
    type ColumnType = article::Column;
    type ActiveModelType = article::ActiveModel;
    type CreateModel = ArticleCreate;
    type UpdateModel = ArticleUpdate;

    const ID_COLUMN: article::Column = article::Column::Id;
    const RESOURCE_NAME_SINGULAR: &'static str = "article";
    const RESOURCE_NAME_PLURAL: &'static str = "articles";

    fn schema() -> ModelSchema {
        describe_entity::<article::Entity>()
            .belongs_to("author", "authors")
            .has_one("detail", "article_details")
            .virtual_field("headline")
            .translated(TranslationSpec::new("article_translations", ["summary"]))
            .build()
    }

    fn sortable_columns() -> Vec<(&'static str, article::Column)> {
        vec![
            ("id", article::Column::Id),
            ("title", article::Column::Title),
            ("views", article::Column::Views),
            ("position", article::Column::Position),
        ]
    }

    fn join_related(
        select: Select<article::Entity>,
        relation: &str,
    ) -> Select<article::Entity> {
        match relation {
            "author" => select.join(JoinType::LeftJoin, article::Relation::Author.def()),
            "detail" => select.join(JoinType::LeftJoin, article::Relation::Detail.def()),
            _ => select,
        }
    }

    fn join_translations(select: Select<article::Entity>) -> Select<article::Entity> {
        select.join(JoinType::LeftJoin, article::Relation::Translations.def())
    }

    fn virtual_value(&self, field: &str) -> Option<String> {
        match field {
            "headline" => Some(format!("{} ({} views)", self.title, self.views)),
            _ => None,
        }
    }

    fn sort_value(&self, field: &str) -> Option<String> {
        match field {
            "title" => Some(self.title.clone()),
            "views" => Some(format!("{:012}", self.views)),
            "id" => Some(format!("{:012}", self.id)),
            other => self.virtual_value(other),
        }
    }

    fn position_column() -> Option<article::Column> {
        Some(article::Column::Position)
    }

    fn export_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.body.clone().unwrap_or_default(),
            self.published.to_string(),
            self.rating.map(|r| r.to_string()).unwrap_or_default(),
            self.views.to_string(),
            self.published_on.map(|d| d.to_string()).unwrap_or_default(),
            self.created_at.map(|t| t.to_string()).unwrap_or_default(),
            self.position.to_string(),
            self.author_id.map(|id| id.to_string()).unwrap_or_default(),
        ]
    }
}

pub fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> chrono::NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, s).unwrap()
}

/// Seed the standard fixture set: two authors, five articles, two details,
/// and en/fr translations for articles 1 and 3.
pub async fn seed_blog(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    for (id, name) in [(1, "Ada Lovelace"), (2, "Grace Hopper")] {
        author::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
        }
        .insert(db)
        .await?;
    }

    let articles = vec![
        ArticleCreate {
            id: 1,
            title: "Active release checklist".to_string(),
            body: Some("ship the ops checklist".to_string()),
            published: true,
            rating: Some(4.5),
            views: 100,
            published_on: Some(date(2024, 1, 15)),
            created_at: Some(datetime(2024, 1, 10, 9, 0, 0)),
            position: 2,
            author_id: Some(1),
        },
        ArticleCreate {
            id: 2,
            title: "Archived postmortem".to_string(),
            body: Some("what went wrong".to_string()),
            published: false,
            rating: Some(2.0),
            views: 10,
            published_on: Some(date(2024, 1, 15)),
            created_at: Some(datetime(2024, 1, 31, 9, 30, 0)),
            position: 0,
            author_id: Some(1),
        },
        ArticleCreate {
            id: 3,
            title: "Cafe style guide".to_string(),
            body: None,
            published: true,
            rating: None,
            views: 55,
            published_on: Some(date(2024, 2, 1)),
            created_at: Some(datetime(2024, 2, 5, 12, 0, 0)),
            position: 1,
            author_id: Some(2),
        },
        ArticleCreate {
            id: 4,
            title: "Active maintenance window".to_string(),
            body: Some("db and cache work".to_string()),
            published: true,
            rating: Some(3.25),
            views: 250,
            published_on: None,
            created_at: Some(datetime(2024, 3, 1, 8, 0, 0)),
            position: 3,
            author_id: Some(2),
        },
        ArticleCreate {
            id: 5,
            title: "Interview with the team".to_string(),
            body: Some("q and a".to_string()),
            published: false,
            rating: Some(5.0),
            views: 999,
            published_on: Some(date(2024, 2, 14)),
            created_at: None,
            position: 4,
            author_id: None,
        },
    ];
    for create in articles {
        Article::create(db, create).await?;
    }

    for (id, article_id, notes) in [(10, 1, "legacy import"), (11, 3, "needs review")] {
        detail::ActiveModel {
            id: Set(id),
            article_id: Set(article_id),
            notes: Set(notes.to_string()),
        }
        .insert(db)
        .await?;
    }

    let translations = [
        (100, 1, "en", "A quiet launch"),
        (101, 1, "fr", "Un lancement discret"),
        (102, 3, "en", "Styling the cafe"),
        (103, 3, "fr", "Le style du cafe"),
    ];
    for (id, article_id, locale, summary) in translations {
        translation::ActiveModel {
            id: Set(id),
            article_id: Set(article_id),
            locale: Set(locale.to_string()),
            summary: Set(summary.to_string()),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}
