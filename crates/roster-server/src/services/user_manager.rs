//! User management service
//!
//! Chooses the backend once, at construction, and turns every backend result
//! into an [`Outcome`] so callers never learn which store answered.

use crate::storage::{MemoryStore, PostgresStore};
use roster_core::{
    BackendConfig, BackendKind, Outcome, Result, RosterError, User, UserId, UserStore,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Invoked when the relational store cannot be reached
pub type FatalHandler = Arc<dyn Fn(&RosterError) + Send + Sync>;

pub struct UserManager {
    store: Arc<dyn UserStore>,
    on_fatal: FatalHandler,
}

impl UserManager {
    pub fn new(backend: &BackendConfig) -> Self {
        let store: Arc<dyn UserStore> = match backend {
            BackendConfig::Memory => Arc::new(MemoryStore::new()),
            BackendConfig::Postgres(params) => Arc::new(PostgresStore::new(params)),
        };

        info!("User storage backend: {}", store.kind());
        Self::with_store(store)
    }

    pub fn with_store(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            on_fatal: Arc::new(terminate_process),
        }
    }

    /// Replace the connectivity-fault policy (process exit by default)
    #[cfg(test)]
    pub fn with_fatal_handler(mut self, handler: FatalHandler) -> Self {
        self.on_fatal = handler;
        self
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.store.kind()
    }

    pub async fn create_user(&self, name: &str) -> Outcome<User> {
        info!("Creating user: name={}", name);

        let result = self.store.create_user(name).await.map(Outcome::Found);
        self.shape("create", result)
    }

    pub async fn get_user(&self, id: UserId) -> Outcome<User> {
        debug!("Fetching user {}", id);

        let result = self.store.get_user(id).await.map(Outcome::from_option);
        self.shape("get", result)
    }

    pub async fn update_user(&self, id: UserId, name: &str) -> Outcome<User> {
        info!("Updating user {}: name={}", id, name);

        let result = self
            .store
            .update_user(id, name)
            .await
            .map(Outcome::from_option);
        self.shape("update", result)
    }

    pub async fn delete_user(&self, id: UserId) -> Outcome<()> {
        info!("Deleting user {}", id);

        let result = self.store.delete_user(id).await.map(Outcome::from);
        self.shape("delete", result)
    }

    fn shape<T>(&self, operation: &str, result: Result<Outcome<T>>) -> Outcome<T> {
        match result {
            Ok(outcome) => outcome,
            Err(e) if e.is_connection() => {
                error!("Failed to {} user, storage unreachable: {}", operation, e);
                (self.on_fatal)(&e);
                Outcome::Failed(e.to_string())
            }
            Err(e) => {
                warn!("Failed to {} user: {}", operation, e);
                Outcome::Failed(e.to_string())
            }
        }
    }
}

fn terminate_process(err: &RosterError) {
    error!("Relational store unreachable, shutting down: {}", err);
    std::process::exit(1);
}
