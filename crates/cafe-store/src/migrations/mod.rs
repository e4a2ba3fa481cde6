//! Migration framework
//!
//! Provides:
//! - Migration runner with checksums
//! - Idempotent application
//! - Embedded SQL migrations
//! - Replacement of the legacy `OrderDetails` table

mod checksums;
mod embedded;
mod legacy;
mod runner;

pub use embedded::{get_migrations, Migration};
pub use runner::apply_migrations;
