//! Cafe Core - domain model and query engine for the cafe order tracker
//!
//! This crate provides the storage-independent half of the system:
//! - Dish, Order and Review records and the flattened `OrderDetail` view row
//! - Fixed-pattern timestamp parsing and formatting
//! - The immutable `OrderDetailCollection` and the query operations over it
//!   (sort by dish name, sort by order id, filter by id, fast orders)
//! - Input validation rules used by the store before anything is written
//! - The structured error and logging facilities shared by every crate
//! - Configuration loading

pub mod collection;
pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod queries;
pub mod rules;
pub mod timestamp;

// Log field names, re-exported for the boundary macros and their callers
pub use cafe_core_types::schema;

// Re-export commonly used types
pub use collection::OrderDetailCollection;
pub use config::CafeConfig;
pub use errors::{CafeError, ExError, ExErrorKind, Result};
pub use model::{Dish, Order, OrderDetail, Review};
pub use timestamp::Timestamp;
