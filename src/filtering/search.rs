//! Substring match strategies for persisted text fields.
//!
//! Accent-insensitive matching needs the `unaccent` SQL function, which only
//! Postgres provides. Rather than attempting the accent-aware match and
//! recovering from a storage error, the strategy is chosen up front from the
//! database backend and each variant is independently testable.

use sea_orm::DatabaseBackend;
use sea_orm::sea_query::{Alias, BinOper, Expr, ExprTrait, Func, SimpleExpr};

/// How persisted `String`/`Text` fields are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// `unaccent(lower(col)) LIKE unaccent(?)` with a lower-cased bound
    /// pattern. Requires the Postgres `unaccent` extension.
    AccentFolded,
    /// `UPPER(col) LIKE ?` with an upper-cased bound pattern.
    CaseInsensitive,
}

impl MatchStrategy {
    /// Select the strategy supported by the given backend.
    #[must_use]
    pub fn for_backend(backend: DatabaseBackend) -> Self {
        match backend {
            DatabaseBackend::Postgres => Self::AccentFolded,
            _ => Self::CaseInsensitive,
        }
    }

    /// Build a substring containment condition for a qualified column.
    #[must_use]
    pub fn substring_condition(self, column: SimpleExpr, query: &str) -> SimpleExpr {
        match self {
            Self::AccentFolded => {
                let pattern = format!("%{}%", query.to_lowercase());
                let folded_column = Func::cust(Alias::new("unaccent")).arg(Func::lower(column));
                let folded_pattern = Func::cust(Alias::new("unaccent")).arg(Expr::val(pattern));
                folded_column.binary(BinOper::Like, folded_pattern)
            }
            Self::CaseInsensitive => {
                let pattern = format!("%{}%", query.to_uppercase());
                Func::upper(column).like(pattern)
            }
        }
    }
}
