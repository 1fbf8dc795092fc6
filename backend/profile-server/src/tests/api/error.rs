use crate::ApiError;

use profile_core::{CoreError, NewBadge};
use profile_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_detail() {
    let error = ApiError::not_found("User not found");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["detail"], "User not found");
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let response = ApiError::forbidden("Not authorized").into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let response = ApiError::validation("name", "name must not be empty").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
    assert_eq!(json["detail"], "name must not be empty");
}

#[tokio::test]
async fn test_service_unavailable_returns_503() {
    let error = ApiError::ServiceUnavailable {
        message: "Identity service unavailable (timeout)".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let response = ApiError::internal("boom").into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_core_validation_converts_to_validation() {
    let payload = NewBadge {
        name: String::new(),
        description: "First steps".into(),
        icon_url: "https://cdn.example.com/a.png".into(),
    };
    let core_error: CoreError = payload.validate().unwrap_err();

    match ApiError::from(core_error) {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("name")),
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_row_not_found_converts_to_not_found() {
    let db_error = DbError::Sqlx {
        source: sqlx::Error::RowNotFound,
        location: ErrorLocation::from(Location::caller()),
    };

    assert!(matches!(ApiError::from(db_error), ApiError::NotFound { .. }));
}

#[test]
fn test_other_db_error_converts_to_internal_without_details() {
    let db_error = DbError::Sqlx {
        source: sqlx::Error::PoolTimedOut,
        location: ErrorLocation::from(Location::caller()),
    };

    match ApiError::from(db_error) {
        ApiError::Internal { message, .. } => assert_eq!(message, "Database operation failed"),
        other => panic!("Expected Internal, got {:?}", other),
    }
}
