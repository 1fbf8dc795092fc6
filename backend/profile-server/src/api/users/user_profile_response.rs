use crate::{BadgeDto, GoalDto};

use profile_core::{ProfileStatistics, UserId, UserProfile};

use serde::Serialize;

/// Aggregated profile: identity fields plus everything this service owns for the user.
#[derive(Debug, Serialize)]
pub struct UserProfileResponse {
    pub id: UserId,
    pub username: String,
    pub email: Option<String>,
    pub badges: Vec<BadgeDto>,
    pub learning_goals: Vec<GoalDto>,
    pub statistics: ProfileStatistics,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(p: UserProfile) -> Self {
        Self {
            id: p.id,
            username: p.username,
            email: p.email,
            badges: p.badges.into_iter().map(BadgeDto::from).collect(),
            learning_goals: p.learning_goals.into_iter().map(GoalDto::from).collect(),
            statistics: p.statistics,
        }
    }
}
