//! Badge REST API handlers

use crate::api::resolve::{authorize_write, parse_id, parse_user_id, prepare_create};
use crate::{
    ApiError, ApiResult, AppState, BadgeDto, BadgeListResponse, BadgeResponse, CallerId,
    DeleteResponse, ListQuery,
};

use profile_core::NewBadge;
use profile_db::BadgeRepository;

use axum::{
    Json,
    extract::{Path, Query, State},
};

/// GET /api/v1/users/{user_id}/badges
pub async fn list_badges(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<BadgeListResponse>> {
    let user_id = parse_user_id(&user_id)?;
    let (skip, limit) = query.bounds();

    let repo = BadgeRepository::new(state.pool.clone());
    let badges = repo.find_by_user(user_id, skip, limit).await?;

    Ok(Json(BadgeListResponse {
        badges: badges.into_iter().map(BadgeDto::from).collect(),
    }))
}

/// POST /api/v1/users/{user_id}/badges
pub async fn create_badge(
    State(state): State<AppState>,
    CallerId(caller): CallerId,
    Path(user_id): Path<String>,
    Json(req): Json<NewBadge>,
) -> ApiResult<Json<BadgeResponse>> {
    let user_id = parse_user_id(&user_id)?;

    // 1. Validate payload
    req.validate()?;

    // 2. Authorize
    authorize_write(caller, user_id)?;

    // 3. Confirm the user and reconcile the local reference
    prepare_create(&state, user_id).await?;

    // 4. Save
    let repo = BadgeRepository::new(state.pool.clone());
    let badge = repo.create(user_id, &req).await?;

    log::info!("Created badge {} for user {} via REST API", badge.id, user_id);

    Ok(Json(BadgeResponse {
        badge: badge.into(),
    }))
}

/// DELETE /api/v1/users/{user_id}/badges/{badge_id}
pub async fn delete_badge(
    State(state): State<AppState>,
    CallerId(caller): CallerId,
    Path((user_id, badge_id)): Path<(String, String)>,
) -> ApiResult<Json<DeleteResponse>> {
    let user_id = parse_user_id(&user_id)?;
    let badge_id = parse_id("badge_id", &badge_id)?;

    authorize_write(caller, user_id)?;

    let repo = BadgeRepository::new(state.pool.clone());
    if !repo.delete(user_id, badge_id).await? {
        return Err(ApiError::not_found("Badge not found"));
    }

    log::info!("Deleted badge {} of user {} via REST API", badge_id, user_id);

    Ok(Json(DeleteResponse::new(badge_id)))
}
