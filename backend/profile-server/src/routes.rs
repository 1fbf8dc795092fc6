use crate::{
    AppState, create_badge, create_goal, delete_badge, delete_goal, get_goal, get_user_profile,
    health, list_badges, list_goals, telemetry, update_goal,
};

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/users/{user_id}", get(get_user_profile))
        .route(
            "/users/{user_id}/badges",
            get(list_badges).post(create_badge),
        )
        .route(
            "/users/{user_id}/badges/{badge_id}",
            axum::routing::delete(delete_badge),
        )
        .route("/users/{user_id}/goals", get(list_goals).post(create_goal))
        .route(
            "/users/{user_id}/goals/{goal_id}",
            get(get_goal).put(update_goal).delete(delete_goal),
        );

    Router::new()
        .nest("/api/v1", api)
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(telemetry::metrics))
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
