use crate::GoalDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GoalListResponse {
    pub goals: Vec<GoalDto>,
}
