pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use api::{
    badges::{
        badge_dto::BadgeDto,
        badge_list_response::BadgeListResponse,
        badge_response::BadgeResponse,
        badges::{create_badge, delete_badge, list_badges},
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::caller_id::CallerId,
    goals::{
        goal_dto::GoalDto,
        goal_list_response::GoalListResponse,
        goal_response::GoalResponse,
        goals::{create_goal, delete_goal, get_goal, list_goals, update_goal},
    },
    list_query::ListQuery,
    users::{user_profile_response::UserProfileResponse, users::get_user_profile},
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;
