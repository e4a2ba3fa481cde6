//! Repository layer for persisting cafe entities to SQLite

pub mod sqlite_repo;

pub use sqlite_repo::CafeRepo;
