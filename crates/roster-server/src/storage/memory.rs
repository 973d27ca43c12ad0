//! In-memory user store using DashMap

use async_trait::async_trait;
use dashmap::DashMap;
use roster_core::{BackendKind, Result, RosterError, User, UserId, UserStore};
use std::sync::atomic::{AtomicI64, Ordering};

const FIRST_USER_ID: UserId = 1;

/// Process-local user store
///
/// Ids come from a monotonic counter and are never handed out twice, even
/// after the record holding them is deleted.
pub struct MemoryStore {
    users: DashMap<UserId, User>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            next_id: AtomicI64::new(FIRST_USER_ID),
        }
    }

    fn allocate_id(&self) -> Result<UserId> {
        self.next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| id.checked_add(1))
            .map_err(|_| RosterError::Operation("user id space exhausted".to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    fn kind(&self) -> BackendKind {
        BackendKind::Memory
    }

    async fn create_user(&self, name: &str) -> Result<User> {
        let user = User::new(self.allocate_id()?, name);
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update_user(&self, id: UserId, name: &str) -> Result<Option<User>> {
        Ok(self.users.get_mut(&id).map(|mut entry| {
            entry.rename(name);
            entry.value().clone()
        }))
    }

    async fn delete_user(&self, id: UserId) -> Result<bool> {
        Ok(self.users.remove(&id).is_some())
    }
}
