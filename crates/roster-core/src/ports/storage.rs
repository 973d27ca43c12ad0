//! Storage trait for user records

use crate::config::BackendKind;
use crate::Result;
use async_trait::async_trait;
use roster_types::{User, UserId};

/// User store
///
/// Absence is reported through `Option`/`bool`, never as an error.
/// `Err` is reserved for faults: `RosterError::Connection` when the store
/// cannot be reached, `RosterError::Operation` when a statement fails.
#[async_trait]
pub trait UserStore: Send + Sync {
    fn kind(&self) -> BackendKind;

    /// Insert a record under a freshly allocated id
    async fn create_user(&self, name: &str) -> Result<User>;
    async fn get_user(&self, id: UserId) -> Result<Option<User>>;
    async fn update_user(&self, id: UserId, name: &str) -> Result<Option<User>>;
    /// Returns whether a record was removed
    async fn delete_user(&self, id: UserId) -> Result<bool>;
}
