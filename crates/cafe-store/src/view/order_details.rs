//! The order detail projection.
//!
//! Reads the `OrderDetails` view (Orders joined with Dishes, left-joined
//! with Reviews) and turns each row into an `OrderDetail`. Rows come back
//! in insertion order: by order id, then by review id, with review-less
//! orders carrying `review = None`.

#![allow(clippy::result_large_err)]

use crate::errors::{domain, from_rusqlite, Result};
use cafe_core::{OrderDetail, OrderDetailCollection, Timestamp};
use rusqlite::Connection;

struct RawDetail {
    order_id: i64,
    dish_name: String,
    order_time: String,
    cook_time: String,
    review: Option<String>,
}

/// Every order detail row currently in the store
///
/// # Errors
///
/// - `InvalidTimestamp` if a stored order time does not match the fixed
///   pattern (only possible for rows written outside `CafeRepo`)
/// - `Persistence` on SQLite failure
pub fn list_all(conn: &Connection) -> Result<OrderDetailCollection> {
    let mut stmt = conn
        .prepare(
            "SELECT OrdersId, dish_name, order_time, cook_time, review
             FROM OrderDetails
             ORDER BY OrdersId, ReviewsId",
        )
        .map_err(from_rusqlite)?;

    let raw_rows = stmt
        .query_map([], |row| {
            Ok(RawDetail {
                order_id: row.get(0)?,
                dish_name: row.get(1)?,
                order_time: row.get(2)?,
                cook_time: row.get(3)?,
                review: row.get(4)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    let details = raw_rows
        .into_iter()
        .map(into_detail)
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(rows = details.len(), "order details loaded");
    Ok(OrderDetailCollection::new(details))
}

fn into_detail(raw: RawDetail) -> Result<OrderDetail> {
    let parse = |field: &str, text: &str| {
        Timestamp::parse(field, text)
            .map_err(|e| domain("list_order_details", e).with_entity_id(raw.order_id.to_string()))
    };
    let order_time = parse("order_time", &raw.order_time)?;
    let cook_time = parse("cook_time", &raw.cook_time)?;
    Ok(OrderDetail::new(
        raw.order_id,
        raw.dish_name,
        order_time,
        cook_time,
        raw.review,
    ))
}
