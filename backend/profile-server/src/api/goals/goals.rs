//! Learning goal REST API handlers

use crate::api::resolve::{authorize_write, parse_id, parse_user_id, prepare_create};
use crate::{
    ApiError, ApiResult, AppState, CallerId, DeleteResponse, GoalDto, GoalListResponse,
    GoalResponse, ListQuery,
};

use profile_core::{LearningGoalChanges, NewLearningGoal};
use profile_db::LearningGoalRepository;

use axum::{
    Json,
    extract::{Path, Query, State},
};

/// GET /api/v1/users/{user_id}/goals
pub async fn list_goals(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<GoalListResponse>> {
    let user_id = parse_user_id(&user_id)?;
    let (skip, limit) = query.bounds();

    let repo = LearningGoalRepository::new(state.pool.clone());
    let goals = repo.find_by_user(user_id, skip, limit).await?;

    Ok(Json(GoalListResponse {
        goals: goals.into_iter().map(GoalDto::from).collect(),
    }))
}

/// GET /api/v1/users/{user_id}/goals/{goal_id}
pub async fn get_goal(
    State(state): State<AppState>,
    Path((user_id, goal_id)): Path<(String, String)>,
) -> ApiResult<Json<GoalResponse>> {
    let user_id = parse_user_id(&user_id)?;
    let goal_id = parse_id("goal_id", &goal_id)?;

    let repo = LearningGoalRepository::new(state.pool.clone());
    let goal = repo
        .find_by_id(user_id, goal_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Learning goal not found"))?;

    Ok(Json(GoalResponse { goal: goal.into() }))
}

/// POST /api/v1/users/{user_id}/goals
pub async fn create_goal(
    State(state): State<AppState>,
    CallerId(caller): CallerId,
    Path(user_id): Path<String>,
    Json(req): Json<NewLearningGoal>,
) -> ApiResult<Json<GoalResponse>> {
    let user_id = parse_user_id(&user_id)?;

    // 1. Validate payload
    req.validate()?;

    // 2. Authorize
    authorize_write(caller, user_id)?;

    // 3. Confirm the user and reconcile the local reference
    prepare_create(&state, user_id).await?;

    // 4. Save
    let repo = LearningGoalRepository::new(state.pool.clone());
    let goal = repo.create(user_id, &req).await?;

    log::info!(
        "Created learning goal {} for user {} via REST API",
        goal.id,
        user_id
    );

    Ok(Json(GoalResponse { goal: goal.into() }))
}

/// PUT /api/v1/users/{user_id}/goals/{goal_id}
pub async fn update_goal(
    State(state): State<AppState>,
    CallerId(caller): CallerId,
    Path((user_id, goal_id)): Path<(String, String)>,
    Json(req): Json<LearningGoalChanges>,
) -> ApiResult<Json<GoalResponse>> {
    let user_id = parse_user_id(&user_id)?;
    let goal_id = parse_id("goal_id", &goal_id)?;

    req.validate()?;
    authorize_write(caller, user_id)?;

    let repo = LearningGoalRepository::new(state.pool.clone());
    let mut goal = repo
        .find_by_id(user_id, goal_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Learning goal not found"))?;

    goal.apply(req);

    if !repo.update(&goal).await? {
        // Deleted between the read and the write
        return Err(ApiError::not_found("Learning goal not found"));
    }

    log::info!(
        "Updated learning goal {} of user {} via REST API",
        goal_id,
        user_id
    );

    Ok(Json(GoalResponse { goal: goal.into() }))
}

/// DELETE /api/v1/users/{user_id}/goals/{goal_id}
pub async fn delete_goal(
    State(state): State<AppState>,
    CallerId(caller): CallerId,
    Path((user_id, goal_id)): Path<(String, String)>,
) -> ApiResult<Json<DeleteResponse>> {
    let user_id = parse_user_id(&user_id)?;
    let goal_id = parse_id("goal_id", &goal_id)?;

    authorize_write(caller, user_id)?;

    let repo = LearningGoalRepository::new(state.pool.clone());
    if !repo.delete(user_id, goal_id).await? {
        return Err(ApiError::not_found("Learning goal not found"));
    }

    log::info!(
        "Deleted learning goal {} of user {} via REST API",
        goal_id,
        user_id
    );

    Ok(Json(DeleteResponse::new(goal_id)))
}
