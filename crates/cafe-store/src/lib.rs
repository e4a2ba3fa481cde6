//! Cafe Store - SQLite persistence for dishes, orders and reviews
//!
//! Provides:
//! - Connection open/configure helpers
//! - Embedded SQL migrations with checksums and idempotent application
//! - The entity repository (`CafeRepo`): create and look up dishes, orders, reviews
//! - The order detail view: one flattened row per order (and review)

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod view;

// Re-export key types
pub use errors::Result;
pub use repo::CafeRepo;
