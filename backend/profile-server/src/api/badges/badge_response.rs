use crate::BadgeDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BadgeResponse {
    pub badge: BadgeDto,
}
