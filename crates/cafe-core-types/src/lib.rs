//! Core types shared across the cafe facilities
//!
//! This crate carries the canonical field keys and event names used by
//! the logging macros in `cafe-core` and by tests asserting on captured
//! events.

pub mod schema;
