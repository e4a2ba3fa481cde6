//! Sort and filter operations over `OrderDetailCollection`.
//!
//! These functions are pure: the store hands over every row of the view
//! in insertion order and the functions here decide what the caller sees.

use chrono::Duration;

use crate::collection::OrderDetailCollection;
use crate::model::OrderDetail;

/// Orders finished in less than this many minutes count as fast
pub const DEFAULT_FAST_THRESHOLD_MINUTES: u32 = 15;

/// All rows ordered by dish name (byte-wise ascending)
///
/// Rows sharing a dish name keep their relative input order.
pub fn sorted_by_dish_name(rows: &OrderDetailCollection) -> OrderDetailCollection {
    let mut sorted: Vec<OrderDetail> = rows.iter().cloned().collect();
    sorted.sort_by(|a, b| a.dish_name.cmp(&b.dish_name));
    sorted.into()
}

/// All rows ordered by order id ascending
///
/// Several rows can share an order id when an order has more than one
/// review; those keep their input order.
pub fn sorted_by_order_id(rows: &OrderDetailCollection) -> OrderDetailCollection {
    let mut sorted: Vec<OrderDetail> = rows.iter().cloned().collect();
    sorted.sort_by_key(|d| d.order_id);
    sorted.into()
}

/// Every row whose order id equals `order_id`; empty if there is none
pub fn by_order_id(rows: &OrderDetailCollection, order_id: i64) -> OrderDetailCollection {
    rows.iter()
        .filter(|d| d.order_id == order_id)
        .cloned()
        .collect()
}

/// Rows whose preparation took strictly less than `threshold_minutes`
///
/// The duration is `cook_time - order_time` with no check that it is
/// positive, so a row whose cook time precedes its order time is always
/// reported as fast.
pub fn fast_orders(rows: &OrderDetailCollection, threshold_minutes: u32) -> OrderDetailCollection {
    let threshold = Duration::minutes(i64::from(threshold_minutes));
    rows.iter()
        .filter(|d| d.prep_duration() < threshold)
        .cloned()
        .collect()
}
