//! Read-only projections over the entity tables

pub mod order_details;

pub use order_details::list_all;
