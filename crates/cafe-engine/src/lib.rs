//! Cafe Engine - Orchestration layer
//!
//! Coordinates the domain rules in `cafe-core` with the SQLite store in
//! `cafe-store`. Every public command here owns its boundary logging.

pub mod commands;

pub use commands::generate::{generate_full_order, FullOrder};
pub use commands::query::{by_order_id, fast_orders, sorted_by_dish_name, sorted_by_order_id};
pub use commands::writer::{add_dish, add_order, add_review};
