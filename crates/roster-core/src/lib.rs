//! Roster Core Library
//!
//! Backend selection, the storage port every backend implements, and the
//! uniform outcome shape returned to callers.

// Re-export pure types from roster-types
pub use roster_types::*;

pub mod config;
pub mod error;
pub mod outcome;
pub mod ports;

pub use crate::config::{AppConfig, BackendConfig, BackendKind, ConnectionParams};
pub use crate::error::{Result, RosterError};
pub use outcome::Outcome;
pub use ports::UserStore;
