use crate::GoalDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GoalResponse {
    pub goal: GoalDto,
}
