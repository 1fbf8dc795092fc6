use crate::{Badge, IdentityRecord, LearningGoal, UserId};

use serde::{Deserialize, Serialize};

/// Badges needed per level step.
pub const BADGES_PER_LEVEL: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStatistics {
    pub total_badges: usize,
    pub total_goals: usize,
    pub level: usize,
}

/// Identity fields merged with the locally owned badges and goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub email: Option<String>,
    pub badges: Vec<Badge>,
    pub learning_goals: Vec<LearningGoal>,
    pub statistics: ProfileStatistics,
}

impl UserProfile {
    pub fn assemble(
        identity: IdentityRecord,
        badges: Vec<Badge>,
        learning_goals: Vec<LearningGoal>,
    ) -> Self {
        let statistics = ProfileStatistics {
            total_badges: badges.len(),
            total_goals: learning_goals.len(),
            level: 1 + badges.len() / BADGES_PER_LEVEL,
        };

        Self {
            id: identity.id,
            username: identity.username,
            email: identity.email,
            badges,
            learning_goals,
            statistics,
        }
    }
}
