//! # Model Schema Registry
//!
//! Every admin-managed model registers a [`ModelSchema`] describing its
//! persisted columns, associations, virtual accessors, and translated
//! attributes. The schema is built once per model type through an explicit
//! registration step and consulted by the filter builder to decide, per
//! field, which query strategy applies.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use backoffice::schema::{FieldKind, ModelSchema, TranslationSpec};
//!
//! fn article_schema() -> ModelSchema {
//!     ModelSchema::builder("articles")
//!         .column("title", FieldKind::String)
//!         .column("published_on", FieldKind::Date)
//!         .belongs_to("author", "authors")
//!         .virtual_field("headline")
//!         .translated(TranslationSpec::new("article_translations", ["summary"]))
//!         .build()
//! }
//! ```
//!
//! Implementations backed by Sea-ORM entities can seed the builder from the
//! entity's column metadata via [`introspect::describe_entity`].

pub mod introspect;

use std::fmt;

/// The filter strategy class of a field.
///
/// This is a closed set: the filter builder matches on it exhaustively, so a
/// field either has a known strategy or fails loudly with
/// `UnsupportedFieldKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Foreign-key reference stored on this model (`<name>_id` column).
    BelongsTo,
    /// Inverse single reference resolved on the target model.
    HasOne,
    /// Inverse multi reference resolved on the target model.
    HasMany,
    /// Short text column.
    String,
    /// Long text column.
    Text,
    /// Calendar date column.
    Date,
    /// Date and time column.
    DateTime,
    /// Arbitrary-precision numeric column.
    Decimal,
    /// Floating point column.
    Number,
    /// Integer column.
    Integer,
    /// Boolean column.
    Boolean,
    /// No known filter strategy. Only assigned to virtual-and-untyped
    /// fields or column types the registry cannot classify.
    Unknown,
}

impl FieldKind {
    /// Whether this kind names an association rather than a column.
    #[must_use]
    pub fn is_association(self) -> bool {
        matches!(self, Self::BelongsTo | Self::HasOne | Self::HasMany)
    }

    /// Whether this kind is matched by substring search.
    #[must_use]
    pub fn is_textual(self) -> bool {
        matches!(self, Self::String | Self::Text)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BelongsTo => "belongs_to",
            Self::HasOne => "has_one",
            Self::HasMany => "has_many",
            Self::String => "string",
            Self::Text => "text",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Decimal => "decimal",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// Everything the filter builder needs to know about one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as supplied in filter parameters.
    pub name: String,
    /// Filter strategy class.
    pub kind: FieldKind,
    /// Computed by code, not backed by a column. Filtered in memory.
    pub is_virtual: bool,
    /// Stored per-locale in the model's translation relation.
    pub is_translated: bool,
    /// Target table for association kinds.
    pub target_table: Option<String>,
}

/// Locale-scoped translation relation for models with translated attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSpec {
    /// Relation/table name joined for translated lookups, e.g.
    /// `article_translations`.
    pub relation: String,
    /// Column holding the locale tag. Conventionally `locale`.
    pub locale_column: String,
    /// Attribute names resolved through the translation relation.
    pub attributes: Vec<String>,
}

impl TranslationSpec {
    pub fn new<I, S>(relation: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            relation: relation.into(),
            locale_column: "locale".to_string(),
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }

    /// Override the locale column name.
    #[must_use]
    pub fn locale_column(mut self, column: impl Into<String>) -> Self {
        self.locale_column = column.into();
        self
    }
}

/// Immutable per-model schema facts, derived once per model type.
#[derive(Debug, Clone)]
pub struct ModelSchema {
    table: String,
    fields: Vec<FieldDescriptor>,
    translations: Option<TranslationSpec>,
}

impl ModelSchema {
    /// Start registering a schema for the given base table.
    #[must_use]
    pub fn builder(table: impl Into<String>) -> ModelSchemaBuilder {
        ModelSchemaBuilder {
            table: table.into(),
            fields: Vec::new(),
            translations: None,
        }
    }

    /// Base table name used to qualify column references.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Look up a field by name. `None` means the name is unknown to this
    /// model and must not be filtered on.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The translation relation, when the model has translated attributes.
    #[must_use]
    pub fn translations(&self) -> Option<&TranslationSpec> {
        self.translations.as_ref()
    }

    /// All registered fields in registration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Names of the base table's persisted columns, in registration order.
    /// Virtual fields, associations and translated attributes (which live
    /// on the translation relation) are excluded. Used as the default
    /// export header.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| !f.is_virtual && !f.is_translated && !f.kind.is_association())
            .map(|f| f.name.as_str())
            .collect()
    }
}

/// Fluent registration for [`ModelSchema`].
#[derive(Debug)]
pub struct ModelSchemaBuilder {
    table: String,
    fields: Vec<FieldDescriptor>,
    translations: Option<TranslationSpec>,
}

impl ModelSchemaBuilder {
    /// Register a persisted column of the given kind.
    #[must_use]
    pub fn column(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            kind,
            is_virtual: false,
            is_translated: false,
            target_table: None,
        });
        self
    }

    /// Register a foreign-key reference. The storage column is
    /// `<name>_id` on the base table.
    #[must_use]
    pub fn belongs_to(mut self, name: impl Into<String>, target_table: impl Into<String>) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            kind: FieldKind::BelongsTo,
            is_virtual: false,
            is_translated: false,
            target_table: Some(target_table.into()),
        });
        self
    }

    /// Register an inverse single reference resolved on `target_table`.
    #[must_use]
    pub fn has_one(mut self, name: impl Into<String>, target_table: impl Into<String>) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            kind: FieldKind::HasOne,
            is_virtual: false,
            is_translated: false,
            target_table: Some(target_table.into()),
        });
        self
    }

    /// Register an inverse multi reference resolved on `target_table`.
    #[must_use]
    pub fn has_many(mut self, name: impl Into<String>, target_table: impl Into<String>) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            kind: FieldKind::HasMany,
            is_virtual: false,
            is_translated: false,
            target_table: Some(target_table.into()),
        });
        self
    }

    /// Register a computed accessor, matched in memory as a string.
    #[must_use]
    pub fn virtual_field(self, name: impl Into<String>) -> Self {
        self.virtual_field_typed(name, FieldKind::String)
    }

    /// Register a computed accessor with an explicit kind. Anything other
    /// than a textual kind has no in-memory strategy and is rejected at
    /// filter time.
    #[must_use]
    pub fn virtual_field_typed(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            kind,
            is_virtual: true,
            is_translated: false,
            target_table: None,
        });
        self
    }

    /// Declare the model's translation relation. Registered fields whose
    /// names appear in the spec are resolved through it.
    #[must_use]
    pub fn translated(mut self, spec: TranslationSpec) -> Self {
        self.translations = Some(spec);
        self
    }

    /// Finalize, resolving translated flags against the translation spec.
    /// Translated attributes absent from the registered fields are added as
    /// string columns of the translation relation.
    #[must_use]
    pub fn build(mut self) -> ModelSchema {
        if let Some(spec) = &self.translations {
            for field in &mut self.fields {
                if spec.attributes.iter().any(|a| *a == field.name) {
                    field.is_translated = true;
                }
            }
            for attr in &spec.attributes {
                if !self.fields.iter().any(|f| f.name == *attr) {
                    self.fields.push(FieldDescriptor {
                        name: attr.clone(),
                        kind: FieldKind::String,
                        is_virtual: false,
                        is_translated: true,
                        target_table: None,
                    });
                }
            }
        }
        ModelSchema {
            table: self.table,
            fields: self.fields,
            translations: self.translations,
        }
    }
}
