use crate::Result as DbErrorResult;

use profile_core::{Badge, NewBadge, UserId};

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct BadgeRow {
    id: i64,
    user_id: i64,
    name: String,
    description: String,
    icon_url: String,
    date_achieved: i64,
}

impl From<BadgeRow> for Badge {
    fn from(r: BadgeRow) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            name: r.name,
            description: r.description,
            icon_url: r.icon_url,
            date_achieved: DateTime::from_timestamp(r.date_achieved, 0).unwrap_or_default(),
        }
    }
}

pub struct BadgeRepository {
    pool: SqlitePool,
}

impl BadgeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a badge. The caller must have ensured the user reference exists.
    pub async fn create(&self, user_id: UserId, badge: &NewBadge) -> DbErrorResult<Badge> {
        let date_achieved = Utc::now().timestamp();

        let row: BadgeRow = sqlx::query_as(
            r#"
              INSERT INTO badges (user_id, name, description, icon_url, date_achieved)
              VALUES (?, ?, ?, ?, ?)
              RETURNING id, user_id, name, description, icon_url, date_achieved
              "#,
        )
        .bind(user_id)
        .bind(&badge.name)
        .bind(&badge.description)
        .bind(&badge.icon_url)
        .bind(date_achieved)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    pub async fn find_by_user(
        &self,
        user_id: UserId,
        skip: i64,
        limit: i64,
    ) -> DbErrorResult<Vec<Badge>> {
        let rows: Vec<BadgeRow> = sqlx::query_as(
            r#"
              SELECT id, user_id, name, description, icon_url, date_achieved
              FROM badges
              WHERE user_id = ?
              ORDER BY id ASC
              LIMIT ? OFFSET ?
              "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Badge::from).collect())
    }

    pub async fn find_by_id(&self, user_id: UserId, badge_id: i64) -> DbErrorResult<Option<Badge>> {
        let row: Option<BadgeRow> = sqlx::query_as(
            r#"
              SELECT id, user_id, name, description, icon_url, date_achieved
              FROM badges
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(badge_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Badge::from))
    }

    /// Returns `false` when no badge with this id belongs to the user.
    pub async fn delete(&self, user_id: UserId, badge_id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM badges WHERE id = ? AND user_id = ?")
            .bind(badge_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
