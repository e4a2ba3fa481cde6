//! Databases written by the earlier Python tool
//!
//! That tool kept `OrderDetails` as a table (or its own view) alongside
//! Dishes / Orders / Reviews. Its contents are derived from those three
//! tables, so it is dropped and replaced by the computed view.

#![allow(clippy::result_large_err)]

use rusqlite::{Connection, OptionalExtension};

use crate::errors::{from_rusqlite, Result};

const ORDER_DETAILS: &str = "OrderDetails";

/// Drop a pre-existing `OrderDetails` table or view, if any
///
/// # Errors
///
/// `Persistence` on SQLite failure.
pub fn drop_stale_order_details(conn: &Connection) -> Result<()> {
    let kind: Option<String> = conn
        .query_row(
            "SELECT type FROM sqlite_master WHERE name = ?1",
            [ORDER_DETAILS],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)?;

    let statement = match kind.as_deref() {
        Some("table") => "DROP TABLE OrderDetails",
        Some("view") => "DROP VIEW OrderDetails",
        _ => return Ok(()),
    };
    conn.execute_batch(statement).map_err(from_rusqlite)?;

    tracing::debug!(kind = ?kind, "dropped legacy OrderDetails");
    Ok(())
}
