//! Query commands: load the order detail view, then sort or filter it.
//!
//! None of these treat "no rows" as an error. Failures are limited to the
//! store being unreadable (`Persistence`) or holding corrupt timestamps.

#![allow(clippy::result_large_err)]

use cafe_core::queries::{self, DEFAULT_FAST_THRESHOLD_MINUTES};
use cafe_core::OrderDetailCollection;
use cafe_core::{log_op_end, log_op_error, log_op_start};
use cafe_store::errors::Result;
use cafe_store::view;
use rusqlite::Connection;

fn run_query<F>(op: &'static str, conn: &Connection, apply: F) -> Result<OrderDetailCollection>
where
    F: FnOnce(&OrderDetailCollection) -> OrderDetailCollection,
{
    let start = std::time::Instant::now();

    let rows = view::list_all(conn).map_err(|e| {
        log_op_error!(
            op,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;
    let result = apply(&rows);

    log_op_end!(
        op,
        duration_ms = start.elapsed().as_millis() as u64,
        result_len = result.len() as u64
    );

    Ok(result)
}

/// Every order detail row, ordered by dish name (ties keep insertion order)
///
/// # Errors
///
/// `Persistence` if the view cannot be read, `InvalidTimestamp` for a
/// corrupt stored row.
pub fn sorted_by_dish_name(conn: &Connection) -> Result<OrderDetailCollection> {
    log_op_start!("sorted_by_dish_name");
    run_query("sorted_by_dish_name", conn, queries::sorted_by_dish_name)
}

/// Every order detail row, ordered by order id
///
/// # Errors
///
/// As for [`sorted_by_dish_name`].
pub fn sorted_by_order_id(conn: &Connection) -> Result<OrderDetailCollection> {
    log_op_start!("sorted_by_order_id");
    run_query("sorted_by_order_id", conn, queries::sorted_by_order_id)
}

/// Rows for one order; empty when the order does not exist
///
/// # Errors
///
/// As for [`sorted_by_dish_name`].
pub fn by_order_id(conn: &Connection, order_id: i64) -> Result<OrderDetailCollection> {
    log_op_start!("by_order_id", order_id = order_id);
    run_query("by_order_id", conn, |rows| {
        queries::by_order_id(rows, order_id)
    })
}

/// Rows prepared in strictly less than `threshold_minutes` (default 15)
///
/// # Errors
///
/// As for [`sorted_by_dish_name`].
pub fn fast_orders(
    conn: &Connection,
    threshold_minutes: Option<u32>,
) -> Result<OrderDetailCollection> {
    let threshold = threshold_minutes.unwrap_or(DEFAULT_FAST_THRESHOLD_MINUTES);
    log_op_start!("fast_orders", threshold_minutes = threshold);
    run_query("fast_orders", conn, |rows| {
        queries::fast_orders(rows, threshold)
    })
}
