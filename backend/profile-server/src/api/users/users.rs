//! Profile aggregation handler

use crate::api::resolve::{parse_user_id, require_identity};
use crate::{ApiResult, AppState, UserProfileResponse};

use profile_core::UserProfile;
use profile_db::{BadgeRepository, LearningGoalRepository};

use axum::{
    Json,
    extract::{Path, State},
};

// Statistics count every row, so the profile is not paged
const UNBOUNDED: i64 = i64::MAX;

/// GET /api/v1/users/{user_id}
pub async fn get_user_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserProfileResponse>> {
    let user_id = parse_user_id(&user_id)?;

    let badge_repo = BadgeRepository::new(state.pool.clone());
    let goal_repo = LearningGoalRepository::new(state.pool.clone());

    let (identity, badges, goals) = tokio::join!(
        require_identity(&state, user_id),
        badge_repo.find_by_user(user_id, 0, UNBOUNDED),
        goal_repo.find_by_user(user_id, 0, UNBOUNDED),
    );

    let profile = UserProfile::assemble(identity?, badges?, goals?);

    Ok(Json(profile.into()))
}
