//! HTTP handlers

pub mod health;
pub mod reply;
pub mod users;

pub use health::health;
