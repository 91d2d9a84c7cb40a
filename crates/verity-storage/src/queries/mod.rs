//! Row-level SQL operations, one module per table family.

pub mod assertion_ops;
pub mod audit_ops;
pub mod entity_ops;
pub mod synthesis_ops;

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use verity_core::VerityResult;

use crate::{corrupt_row, to_storage_err};

/// Run `f` inside one transaction; any error rolls everything back.
pub(crate) fn in_transaction<T>(
    conn: &Connection,
    label: &str,
    f: impl FnOnce(&Connection) -> VerityResult<T>,
) -> VerityResult<T> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("{label} begin: {e}")))?;

    match f(&*tx) {
        Ok(value) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("{label} commit: {e}")))?;
            Ok(value)
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

/// Parse an RFC 3339 timestamp column.
pub(crate) fn parse_dt(column: &str, value: &str) -> VerityResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| corrupt_row(format!("parse {column} '{value}': {e}")))
}
