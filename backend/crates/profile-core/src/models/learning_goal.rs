use crate::models::check_length;
use crate::{CoreError, Result as CoreErrorResult, UserId};

use serde::{Deserialize, Serialize};

pub const MAX_GOAL_TITLE_LENGTH: usize = 200;
pub const MAX_GOAL_DESCRIPTION_LENGTH: usize = 1000;
pub const MAX_GOAL_STATUS_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningGoal {
    pub id: i64,
    pub user_id: UserId,

    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub streak_count: i64,
}

impl LearningGoal {
    /// Applies the fields present in `changes`, leaving the rest untouched.
    pub fn apply(&mut self, changes: LearningGoalChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(streak_count) = changes.streak_count {
            self.streak_count = streak_count;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLearningGoal {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    #[serde(default)]
    pub streak_count: i64,
}

impl NewLearningGoal {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        check_length("title", &self.title, 1, MAX_GOAL_TITLE_LENGTH)?;
        if let Some(ref description) = self.description {
            check_length("description", description, 0, MAX_GOAL_DESCRIPTION_LENGTH)?;
        }
        check_length("status", &self.status, 1, MAX_GOAL_STATUS_LENGTH)?;
        check_streak(self.streak_count)
    }
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningGoalChanges {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub streak_count: Option<i64>,
}

impl LearningGoalChanges {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if let Some(ref title) = self.title {
            check_length("title", title, 1, MAX_GOAL_TITLE_LENGTH)?;
        }
        if let Some(ref description) = self.description {
            check_length("description", description, 0, MAX_GOAL_DESCRIPTION_LENGTH)?;
        }
        if let Some(ref status) = self.status {
            check_length("status", status, 1, MAX_GOAL_STATUS_LENGTH)?;
        }
        if let Some(streak_count) = self.streak_count {
            check_streak(streak_count)?;
        }
        Ok(())
    }
}

#[track_caller]
fn check_streak(streak_count: i64) -> CoreErrorResult<()> {
    if streak_count < 0 {
        return Err(CoreError::validation(
            "streak_count",
            format!("streak_count must not be negative, got {streak_count}"),
        ));
    }
    Ok(())
}
