pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::badge::{Badge, NewBadge};
pub use models::identity_record::IdentityRecord;
pub use models::learning_goal::{LearningGoal, LearningGoalChanges, NewLearningGoal};
pub use models::user_profile::{ProfileStatistics, UserProfile};
pub use models::user_reference::{UserId, UserReference};
