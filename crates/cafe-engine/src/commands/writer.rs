//! Writer commands: create dishes, orders and reviews.
//!
//! Each command delegates to `CafeRepo` and persists exactly one row.

#![allow(clippy::result_large_err)]

use cafe_core::model::{Dish, Order, Review};
use cafe_core::{log_op_end, log_op_error, log_op_start};
use cafe_store::errors::Result;
use cafe_store::CafeRepo;
use rusqlite::Connection;

/// Create a dish
///
/// ## Errors
///
/// - `InvalidName`: `name` is empty
/// - `Persistence`: Database error
pub fn add_dish(conn: &Connection, name: &str) -> Result<Dish> {
    log_op_start!("add_dish");
    let start = std::time::Instant::now();

    let dish = CafeRepo::create_dish(conn, name).map_err(|e| {
        log_op_error!(
            "add_dish",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "add_dish",
        duration_ms = start.elapsed().as_millis() as u64,
        dish_id = dish.id
    );

    Ok(dish)
}

/// Create an order for an existing dish
///
/// `order_time` and `cook_time` must already be formatted as
/// `YYYY-MM-DD HH:MM:SS`.
///
/// ## Errors
///
/// - `InvalidTimestamp`: either time is malformed
/// - `NotFound`: `dish_id` does not exist
/// - `Persistence`: Database error
pub fn add_order(
    conn: &Connection,
    dish_id: i64,
    order_time: &str,
    cook_time: &str,
) -> Result<Order> {
    log_op_start!("add_order", dish_id = dish_id);
    let start = std::time::Instant::now();

    let order = CafeRepo::create_order(conn, dish_id, order_time, cook_time).map_err(|e| {
        log_op_error!(
            "add_order",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            dish_id = dish_id
        );
        e
    })?;

    log_op_end!(
        "add_order",
        duration_ms = start.elapsed().as_millis() as u64,
        order_id = order.id
    );

    Ok(order)
}

/// Attach a review to an existing order
///
/// ## Errors
///
/// - `NotFound`: `order_id` does not exist
/// - `Persistence`: Database error
pub fn add_review(conn: &Connection, order_id: i64, text: &str) -> Result<Review> {
    log_op_start!("add_review", order_id = order_id);
    let start = std::time::Instant::now();

    let review = CafeRepo::create_review(conn, order_id, text).map_err(|e| {
        log_op_error!(
            "add_review",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            order_id = order_id
        );
        e
    })?;

    log_op_end!(
        "add_review",
        duration_ms = start.elapsed().as_millis() as u64,
        review_id = review.id
    );

    Ok(review)
}
