//! PostgreSQL user store
//!
//! No pool and no long-lived connection: every operation connects, runs a
//! single statement inside a transaction, commits (or rolls back on error)
//! and closes the connection before returning.

use async_trait::async_trait;
use futures::future::BoxFuture;
use roster_core::{BackendKind, ConnectionParams, Result, RosterError, User, UserId, UserStore};
use sqlx::postgres::{PgConnectOptions, PgConnection, PgQueryResult};
use sqlx::{Connection, Postgres, Transaction};
use tracing::{debug, warn};

pub struct PostgresStore {
    options: PgConnectOptions,
}

impl PostgresStore {
    pub fn new(params: &ConnectionParams) -> Self {
        let options = PgConnectOptions::new()
            .host(&params.host)
            .port(params.port)
            .username(&params.user)
            .password(&params.password)
            .database(&params.dbname);

        Self::from_options(options)
    }

    pub fn from_options(options: PgConnectOptions) -> Self {
        Self { options }
    }

    async fn connect(&self) -> Result<PgConnection> {
        PgConnection::connect_with(&self.options)
            .await
            .map_err(|e| RosterError::Connection(e.to_string()))
    }

    /// Run `statement` in its own connection and transaction.
    ///
    /// sqlx commits when the callback returns `Ok` and rolls back on `Err`.
    async fn run<T, F>(&self, statement: F) -> Result<T>
    where
        T: Send,
        F: for<'c> FnOnce(
                &'c mut Transaction<'_, Postgres>,
            ) -> BoxFuture<'c, std::result::Result<T, sqlx::Error>>
            + Send
            + Sync
            + 'static,
    {
        let mut conn = self.connect().await?;
        let result = conn.transaction(statement).await;

        if let Err(e) = conn.close().await {
            warn!("Failed to close database connection: {}", e);
        }

        result.map_err(|e| RosterError::Operation(e.to_string()))
    }
}

#[async_trait]
impl UserStore for PostgresStore {
    fn kind(&self) -> BackendKind {
        BackendKind::Postgres
    }

    async fn create_user(&self, name: &str) -> Result<User> {
        let user_name = name.to_string();
        let id: i64 = self
            .run(move |tx| {
                Box::pin(async move {
                    sqlx::query_scalar(
                        r#"INSERT INTO "user" (user_name) VALUES ($1) RETURNING id::BIGINT"#,
                    )
                    .bind(user_name)
                    .fetch_one(&mut **tx)
                    .await
                })
            })
            .await?;

        debug!("Inserted user row {}", id);
        Ok(User::new(id, name))
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        let row: Option<(i64, String)> = self
            .run(move |tx| {
                Box::pin(async move {
                    sqlx::query_as(r#"SELECT id::BIGINT, user_name FROM "user" WHERE id = $1"#)
                        .bind(id)
                        .fetch_optional(&mut **tx)
                        .await
                })
            })
            .await?;

        Ok(row.map(|(id, name)| User::new(id, name)))
    }

    async fn update_user(&self, id: UserId, name: &str) -> Result<Option<User>> {
        let user_name = name.to_string();
        let result: PgQueryResult = self
            .run(move |tx| {
                Box::pin(async move {
                    sqlx::query(r#"UPDATE "user" SET user_name = $1 WHERE id = $2"#)
                        .bind(user_name)
                        .bind(id)
                        .execute(&mut **tx)
                        .await
                })
            })
            .await?;

        // Echo the caller's input rather than re-reading the row
        Ok((result.rows_affected() > 0).then(|| User::new(id, name)))
    }

    async fn delete_user(&self, id: UserId) -> Result<bool> {
        let result: PgQueryResult = self
            .run(move |tx| {
                Box::pin(async move {
                    sqlx::query(r#"DELETE FROM "user" WHERE id = $1"#)
                        .bind(id)
                        .execute(&mut **tx)
                        .await
                })
            })
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
