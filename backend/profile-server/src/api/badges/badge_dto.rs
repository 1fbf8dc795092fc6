use profile_core::{Badge, UserId};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BadgeDto {
    pub id: i64,
    pub owner_id: UserId,
    pub name: String,
    pub description: String,
    pub icon_url: String,
    pub date_achieved: String,
}

impl From<Badge> for BadgeDto {
    fn from(b: Badge) -> Self {
        Self {
            id: b.id,
            owner_id: b.user_id,
            name: b.name,
            description: b.description,
            icon_url: b.icon_url,
            date_achieved: b.date_achieved.to_rfc3339(),
        }
    }
}
