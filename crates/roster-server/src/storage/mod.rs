//! Storage layer
//!
//! Two interchangeable `UserStore` implementations: a PostgreSQL store that
//! opens one connection per operation, and a DashMap-backed in-memory store.

pub mod db;
pub mod memory;

pub use db::PostgresStore;
pub use memory::MemoryStore;
