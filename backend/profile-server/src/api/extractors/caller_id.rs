//! Axum extractor for the caller's identity

use crate::ApiError;

use profile_core::UserId;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

pub const CALLER_ID_HEADER: &str = "X-User-Id";

/// The user on whose behalf the request is made, from the `X-User-Id` header.
///
/// `None` when the header is missing or not an integer; handlers that write
/// treat that as forbidden.
pub struct CallerId(pub Option<UserId>);

impl<S: Send + Sync> FromRequestParts<S> for CallerId {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(header_value) = parts.headers.get(CALLER_ID_HEADER) else {
                return Ok(CallerId(None));
            };

            let parsed = header_value
                .to_str()
                .ok()
                .and_then(|raw| raw.trim().parse::<UserId>().ok());

            if parsed.is_none() {
                log::warn!("Ignoring malformed {} header", CALLER_ID_HEADER);
            }

            Ok(CallerId(parsed))
        }
    }
}
