//! # Error Handling
//!
//! Filter-application failures are programmer/configuration errors surfaced
//! before any query reaches the storage layer; they carry field-level
//! detail for diagnosis but are reported to users as a single aggregate
//! message. Database errors are logged server-side via `tracing` and never
//! exposed to clients.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use std::fmt;

use crate::schema::FieldKind;

/// A filter entry that cannot be turned into a query constraint.
///
/// All variants are raised at plan-building time, so no partial or garbled
/// query ever reaches the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The field name resolves to neither a column, an association, nor a
    /// virtual accessor.
    UnknownField { field: String },
    /// The field's kind has no filter strategy (`has_many`, `unknown`, or a
    /// non-textual virtual field).
    UnsupportedFieldKind { field: String, kind: FieldKind },
    /// The value's shape does not match what the field kind requires.
    InvalidFilterShape {
        field: String,
        expected: &'static str,
    },
    /// An association id list contained a non-numeric token.
    InvalidIdentifier { field: String, token: String },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField { field } => write!(f, "unknown filter field `{field}`"),
            Self::UnsupportedFieldKind { field, kind } => {
                write!(f, "no filter strategy for `{field}` of kind `{kind}`")
            }
            Self::InvalidFilterShape { field, expected } => {
                write!(f, "filter on `{field}` expects {expected}")
            }
            Self::InvalidIdentifier { field, token } => {
                write!(f, "non-numeric id `{token}` in filter on `{field}`")
            }
        }
    }
}

impl std::error::Error for FilterError {}

/// Admin-layer error with sanitized responses and logged internals.
#[derive(Debug)]
pub enum AdminError {
    /// 404 - resource doesn't exist.
    NotFound {
        resource: String,
        id: Option<String>,
    },
    /// 400 - invalid input from the caller.
    BadRequest { message: String },
    /// 422 - the supplied filters could not be applied.
    Filter(FilterError),
    /// 500 - database error. Details are logged, not exposed.
    Database { internal: DbErr },
    /// 500 - generic internal error. Details are logged, not exposed.
    Internal {
        message: String,
        internal: Option<String>,
    },
}

impl AdminError {
    pub fn not_found(resource: impl Into<String>, id: Option<String>) -> Self {
        Self::NotFound { resource: resource.into(), id }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    #[must_use]
    pub fn database(err: DbErr) -> Self {
        Self::Database { internal: err }
    }

    pub fn internal(message: impl Into<String>, internal: Option<String>) -> Self {
        Self::Internal { message: message.into(), internal }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Filter(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The sanitized, user-facing message. Filter errors aggregate to a
    /// single generic message; the field-level detail is only logged.
    fn user_message(&self) -> String {
        match self {
            Self::NotFound { resource, id } => match id {
                Some(id) => format!("{resource} with id '{id}' not found"),
                None => format!("{resource} not found"),
            },
            Self::BadRequest { message } => message.clone(),
            Self::Filter(_) => "filters could not be applied".to_string(),
            Self::Database { .. } => "a database error occurred".to_string(),
            Self::Internal { message, .. } => message.clone(),
        }
    }

    /// Log internal detail (not sent to the user).
    fn log_internal(&self) {
        match self {
            Self::Database { internal } => {
                tracing::error!(error = ?internal, "database error");
            }
            Self::Internal { internal: Some(details), .. } => {
                tracing::error!(details = %details, "internal error");
            }
            Self::Filter(err) => {
                tracing::debug!(error = %err, "rejected filter set");
            }
            _ => {
                tracing::debug!(
                    error = %self.user_message(),
                    status = %self.status_code(),
                    "admin error"
                );
            }
        }
    }
}

impl From<FilterError> for AdminError {
    fn from(err: FilterError) -> Self {
        Self::Filter(err)
    }
}

impl From<DbErr> for AdminError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(message) => Self::NotFound { resource: message, id: None },
            other => Self::Database { internal: other },
        }
    }
}

/// Sanitized response body.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        self.log_internal();
        let status = self.status_code();
        let body = ErrorResponse { error: self.user_message() };
        (status, Json(body)).into_response()
    }
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for AdminError {}
