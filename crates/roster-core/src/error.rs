//! Error types for Roster

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Config error: {0}")]
    Config(String),

    /// The relational store could not be reached
    #[error("Connection error: {0}")]
    Connection(String),

    /// A statement failed after a connection was established.
    /// The description is surfaced to callers verbatim.
    #[error("{0}")]
    Operation(String),
}

impl RosterError {
    pub fn is_connection(&self) -> bool {
        matches!(self, RosterError::Connection(_))
    }
}

impl From<config::ConfigError> for RosterError {
    fn from(e: config::ConfigError) -> Self {
        RosterError::Config(e.to_string())
    }
}
