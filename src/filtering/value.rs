//! Filter value shapes and the ordered filter set.

use serde_json::Value;

/// A user-supplied filter value. The variant is inferred from the shape of
/// the input: a bare value, a sub-object with `from`/`to` bounds, or an
/// array of tokens. Which shapes a field accepts depends on its kind and is
/// enforced by the filter builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// A single value, matched per the field kind's scalar strategy.
    Scalar(String),
    /// Inclusive bounds for temporal and numeric fields. Either side may be
    /// omitted.
    Range {
        from: Option<String>,
        to: Option<String>,
    },
    /// Id tokens for association membership filters.
    List(Vec<String>),
}

impl FilterValue {
    /// Infer the value shape from parsed JSON.
    ///
    /// Strings, numbers and booleans become scalars; arrays become lists;
    /// objects are read as `from`/`to` ranges with empty bounds normalized
    /// to `None`. `null` becomes an empty scalar, which is skipped as blank.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::Scalar(s.clone()),
            Value::Number(n) => Self::Scalar(n.to_string()),
            Value::Bool(b) => Self::Scalar(b.to_string()),
            Value::Array(items) => {
                Self::List(items.iter().map(json_token).collect())
            }
            Value::Object(map) => Self::Range {
                from: map.get("from").map(json_token).filter(|s| !s.trim().is_empty()),
                to: map.get("to").map(json_token).filter(|s| !s.trim().is_empty()),
            },
            Value::Null => Self::Scalar(String::new()),
        }
    }

    /// Blank values are skipped by the filter builder without error.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Scalar(s) => s.trim().is_empty(),
            Self::Range { from, to } => from.is_none() && to.is_none(),
            Self::List(items) => items.is_empty(),
        }
    }
}

fn json_token(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Ordered mapping of field name to filter value.
///
/// Insertion order is preserved so that successive plan builds over the same
/// input produce identical predicate text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    entries: Vec<(String, FilterValue)>,
}

impl FilterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter entry, keeping insertion order.
    pub fn insert(&mut self, field: impl Into<String>, value: FilterValue) {
        self.entries.push((field.into(), value));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Read a filter set from a parsed JSON object, one entry per key in
    /// document order. Returns `None` when the value is not an object.
    #[must_use]
    pub fn from_json_object(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        Some(
            map.iter()
                .map(|(k, v)| (k.clone(), FilterValue::from_json(v)))
                .collect(),
        )
    }
}

impl FromIterator<(String, FilterValue)> for FilterSet {
    fn from_iter<I: IntoIterator<Item = (String, FilterValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
