//! Database connection management
//!
//! The connection is an explicit handle: callers open it, pass `&Connection`
//! to every store function and close it when done.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::migrations::apply_migrations;
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path
///
/// # Errors
///
/// `Persistence` on SQLite failure.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
///
/// # Errors
///
/// `Persistence` on SQLite failure.
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection with the settings every cafe database needs
///
/// # Errors
///
/// `Persistence` on SQLite failure.
pub fn configure(conn: &Connection) -> Result<()> {
    // Referential integrity is also checked in code, this is the backstop
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(from_rusqlite)?;

    // In-memory databases report "memory" and ignore the request
    let _mode: String = conn
        .query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))
        .map_err(from_rusqlite)?;

    Ok(())
}

/// Open, configure and migrate a database file in one step
///
/// # Errors
///
/// `Persistence` if the file cannot be opened or a migration fails.
pub fn open_store<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let mut conn = open(path)?;
    configure(&conn)?;
    apply_migrations(&mut conn)?;
    tracing::debug!("cafe store ready");
    Ok(conn)
}

/// In-memory variant of [`open_store`]
///
/// # Errors
///
/// Same as [`open_store`].
pub fn open_store_in_memory() -> Result<Connection> {
    let mut conn = open_in_memory()?;
    configure(&conn)?;
    apply_migrations(&mut conn)?;
    Ok(conn)
}

/// Close a connection, surfacing any error SQLite reports on close
///
/// # Errors
///
/// `Persistence` on SQLite failure.
pub fn close(conn: Connection) -> Result<()> {
    conn.close().map_err(|(_, e)| from_rusqlite(e))
}
