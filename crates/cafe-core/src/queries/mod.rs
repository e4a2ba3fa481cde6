//! Query module for read-only operations over the order detail view
//!
//! Key principles:
//! - All queries are read-only and return a new, fully materialized collection
//! - "No matches" is an empty collection, never an error
//! - Sorting is stable, so equal keys keep the order they were read in

pub mod order_detail_queries;

pub use order_detail_queries::{
    by_order_id, fast_orders, sorted_by_dish_name, sorted_by_order_id,
    DEFAULT_FAST_THRESHOLD_MINUTES,
};
