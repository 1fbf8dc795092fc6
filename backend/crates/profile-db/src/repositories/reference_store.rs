use crate::{DbError, Result as DbErrorResult};

use profile_core::{UserId, UserReference};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use sqlx::SqlitePool;

/// Point lookups and inserts over the `auth_users` reference table.
///
/// Implementations must reject a second `create` for the same id with
/// [`DbError::Conflict`] so callers can tell a lost race from a real failure.
#[async_trait]
pub trait ReferenceStore: Send + Sync {
    async fn get(&self, id: UserId) -> DbErrorResult<Option<UserReference>>;

    async fn exists(&self, id: UserId) -> DbErrorResult<bool> {
        Ok(self.get(id).await?.is_some())
    }

    async fn create(&self, id: UserId) -> DbErrorResult<UserReference>;
}

pub struct SqliteReferenceStore {
    pool: SqlitePool,
}

impl SqliteReferenceStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferenceStore for SqliteReferenceStore {
    async fn get(&self, id: UserId) -> DbErrorResult<Option<UserReference>> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM auth_users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(id,)| UserReference::new(id)))
    }

    async fn exists(&self, id: UserId) -> DbErrorResult<bool> {
        let found: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM auth_users WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(found != 0)
    }

    async fn create(&self, id: UserId) -> DbErrorResult<UserReference> {
        let result = sqlx::query("INSERT INTO auth_users (id) VALUES (?) ON CONFLICT(id) DO NOTHING")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| conflict_or(e, id))?;

        if result.rows_affected() == 0 {
            return Err(DbError::Conflict {
                entity: "auth user reference",
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(UserReference::new(id))
    }
}

#[track_caller]
fn conflict_or(error: sqlx::Error, id: UserId) -> DbError {
    match error {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => DbError::Conflict {
            entity: "auth user reference",
            id,
            location: ErrorLocation::from(Location::caller()),
        },
        other => DbError::from(other),
    }
}
