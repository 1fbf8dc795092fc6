use crate::Result as DbErrorResult;

use profile_core::{LearningGoal, NewLearningGoal, UserId};

use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct LearningGoalRow {
    id: i64,
    user_id: i64,
    title: String,
    description: Option<String>,
    status: String,
    streak_count: i64,
}

impl From<LearningGoalRow> for LearningGoal {
    fn from(r: LearningGoalRow) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            title: r.title,
            description: r.description,
            status: r.status,
            streak_count: r.streak_count,
        }
    }
}

pub struct LearningGoalRepository {
    pool: SqlitePool,
}

impl LearningGoalRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: UserId,
        goal: &NewLearningGoal,
    ) -> DbErrorResult<LearningGoal> {
        let row: LearningGoalRow = sqlx::query_as(
            r#"
              INSERT INTO learning_goals (user_id, title, description, status, streak_count)
              VALUES (?, ?, ?, ?, ?)
              RETURNING id, user_id, title, description, status, streak_count
              "#,
        )
        .bind(user_id)
        .bind(&goal.title)
        .bind(&goal.description)
        .bind(&goal.status)
        .bind(goal.streak_count)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    pub async fn find_by_user(
        &self,
        user_id: UserId,
        skip: i64,
        limit: i64,
    ) -> DbErrorResult<Vec<LearningGoal>> {
        let rows: Vec<LearningGoalRow> = sqlx::query_as(
            r#"
              SELECT id, user_id, title, description, status, streak_count
              FROM learning_goals
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

        Ok(rows.into_iter().map(LearningGoal::from).collect())
    }

    pub async fn find_by_id(
        &self,
        user_id: UserId,
        goal_id: i64,
    ) -> DbErrorResult<Option<LearningGoal>> {
        let row: Option<LearningGoalRow> = sqlx::query_as(
            r#"
              SELECT id, user_id, title, description, status, streak_count
              FROM learning_goals
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(goal_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(LearningGoal::from))
    }

    /// Persist every mutable field of `goal`. Returns `false` if the row is gone.
    pub async fn update(&self, goal: &LearningGoal) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              UPDATE learning_goals
              SET title = ?, description = ?, status = ?, streak_count = ?
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(&goal.title)
        .bind(&goal.description)
        .bind(&goal.status)
        .bind(goal.streak_count)
        .bind(goal.id)
        .bind(goal.user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, user_id: UserId, goal_id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM learning_goals WHERE id = ? AND user_id = ?")
            .bind(goal_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
