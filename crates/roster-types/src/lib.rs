//! Roster Types - Pure type definitions
//!
//! Records and wire bodies shared by the storage core and the HTTP server.
//! No async runtime or database dependencies live here.

pub mod user;
pub mod wire;

pub use user::*;
pub use wire::*;
