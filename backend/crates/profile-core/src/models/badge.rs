use crate::models::check_length;
use crate::{Result as CoreErrorResult, UserId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MAX_BADGE_NAME_LENGTH: usize = 100;
pub const MAX_BADGE_DESCRIPTION_LENGTH: usize = 500;
pub const MAX_BADGE_ICON_URL_LENGTH: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: i64,
    pub user_id: UserId,

    pub name: String,
    pub description: String,
    pub icon_url: String,

    pub date_achieved: DateTime<Utc>,
}

/// Payload for awarding a badge to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBadge {
    pub name: String,
    pub description: String,
    pub icon_url: String,
}

impl NewBadge {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        check_length("name", &self.name, 1, MAX_BADGE_NAME_LENGTH)?;
        check_length(
            "description",
            &self.description,
            1,
            MAX_BADGE_DESCRIPTION_LENGTH,
        )?;
        check_length("icon_url", &self.icon_url, 1, MAX_BADGE_ICON_URL_LENGTH)?;
        Ok(())
    }
}
