//! # Streaming CSV Export
//!
//! Writes a composed query's rows to an output sink as delimited records,
//! fetching in chunks so the full result set is never buffered. The row cap
//! bounds resource usage on large tables; [`crate::AdminConfig`] supplies
//! the default of 5000.

use std::io::Write;

use sea_orm::{DatabaseConnection, PaginatorTrait, Select};

use crate::core::traits::AdminResource;
use crate::errors::AdminError;

const EXPORT_CHUNK_ROWS: u64 = 500;

/// Stream a select's rows into `out` as CSV, capped at `row_limit` records.
/// Returns the number of records written, excluding the header.
///
/// # Errors
///
/// Returns a database error from chunk fetches, or an internal error when
/// the sink fails.
pub async fn stream_csv<T: AdminResource>(
    db: &DatabaseConnection,
    select: Select<T::EntityType>,
    row_limit: u64,
    out: &mut dyn Write,
) -> Result<u64, AdminError> {
    write_record(out, &T::export_columns())?;

    let mut written: u64 = 0;
    let mut pages = select.paginate(db, EXPORT_CHUNK_ROWS);
    'fetch: while let Some(batch) = pages.fetch_and_next().await? {
        for model in batch {
            if written >= row_limit {
                tracing::debug!(
                    resource = T::RESOURCE_NAME_PLURAL,
                    row_limit,
                    "export truncated at row cap"
                );
                break 'fetch;
            }
            let row = T::from(model);
            write_record(out, &row.export_row())?;
            written += 1;
        }
    }
    Ok(written)
}

fn write_record(out: &mut dyn Write, fields: &[String]) -> Result<(), AdminError> {
    let line = fields.iter().map(|f| quote_field(f)).collect::<Vec<_>>().join(",");
    out.write_all(line.as_bytes())
        .and_then(|()| out.write_all(b"\n"))
        .map_err(|e| AdminError::internal("export sink failure", Some(e.to_string())))
}

/// RFC-4180 quoting: fields containing the delimiter, quotes or line
/// breaks are wrapped, with embedded quotes doubled.
fn quote_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
