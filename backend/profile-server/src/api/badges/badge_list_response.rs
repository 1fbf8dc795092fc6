use crate::BadgeDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BadgeListResponse {
    pub badges: Vec<BadgeDto>,
}
