use profile_core::{LearningGoal, UserId};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GoalDto {
    pub id: i64,
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub streak_count: i64,
}

impl From<LearningGoal> for GoalDto {
    fn from(g: LearningGoal) -> Self {
        Self {
            id: g.id,
            owner_id: g.user_id,
            title: g.title,
            description: g.description,
            status: g.status,
            streak_count: g.streak_count,
        }
    }
}
