//! Path parsing and the checks every write runs before touching the database

use crate::{ApiError, AppState};

use profile_core::{IdentityRecord, UserId};
use profile_identity::IdentityLookup;

use std::panic::Location;

use error_location::ErrorLocation;

/// Parse a positive integer id from a path segment.
///
/// # Errors
/// Returns `ApiError::Validation` naming `field` when the segment is not an
/// integer or is not positive.
#[track_caller]
pub fn parse_id(field: &str, raw: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::validation(
            field,
            format!("{} must be a positive integer, got '{}'", field, raw),
        )),
    }
}

#[track_caller]
pub fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    parse_id("user_id", raw)
}

/// The caller may only modify their own data.
#[track_caller]
pub fn authorize_write(caller: Option<UserId>, user_id: UserId) -> Result<(), ApiError> {
    match caller {
        Some(caller) if caller == user_id => Ok(()),
        Some(caller) => {
            log::warn!("User {} attempted to modify data of user {}", caller, user_id);
            Err(ApiError::forbidden("Not authorized to modify this user's data"))
        }
        None => Err(ApiError::forbidden("Missing or invalid X-User-Id header")),
    }
}

/// Ask the identity service for the user, mapping absence to an API error.
///
/// A definitive "no such user" is always 404. An unreachable service is 404
/// or 503 depending on `unavailable_as_not_found`.
pub async fn require_identity(
    state: &AppState,
    user_id: UserId,
) -> Result<IdentityRecord, ApiError> {
    match state.identity.lookup_user(user_id).await {
        IdentityLookup::Found(record) => Ok(record),
        IdentityLookup::NotFound => Err(user_not_found()),
        IdentityLookup::Unavailable(e) if state.unavailable_as_not_found => {
            log::warn!(
                "Identity service unavailable for user {} ({}), reporting not found",
                user_id,
                e.reason()
            );
            Err(user_not_found())
        }
        IdentityLookup::Unavailable(e) => Err(ApiError::ServiceUnavailable {
            message: format!("Identity service unavailable ({})", e.reason()),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Confirm the user exists upstream and make sure the local reference row does too.
pub async fn prepare_create(state: &AppState, user_id: UserId) -> Result<(), ApiError> {
    require_identity(state, user_id).await?;
    state.reconciler.ensure(user_id).await?;
    Ok(())
}

#[track_caller]
fn user_not_found() -> ApiError {
    ApiError::not_found("User not found")
}
