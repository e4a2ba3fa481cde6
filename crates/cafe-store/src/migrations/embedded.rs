//! Embedded SQL migrations
//!
//! Migrations are embedded at compile time using include_str!

use rusqlite::Connection;

use crate::errors::Result;
use crate::migrations::legacy::drop_stale_order_details;

/// Migration metadata
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
    /// Runs in the migration's transaction just before `sql`
    pub prepare: Option<fn(&Connection) -> Result<()>>,
}

/// Get all embedded migrations in order
pub fn get_migrations() -> Vec<Migration> {
    vec![
        Migration {
            id: "001_initial_schema",
            sql: include_str!("../../migrations/001_initial_schema.sql"),
            prepare: None,
        },
        Migration {
            id: "002_order_details_view",
            sql: include_str!("../../migrations/002_order_details_view.sql"),
            prepare: Some(drop_stale_order_details),
        },
    ]
}
