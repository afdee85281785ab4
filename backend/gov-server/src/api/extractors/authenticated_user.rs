//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use gov_auth::{AccessLevel, AccessOutcome, Principal};

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use error_location::ErrorLocation;

/// Caller with a valid bearer token, any role.
pub struct AuthenticatedUser(pub Principal);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let principal = authorize(parts, state, AccessLevel::Authenticated)?;
            Ok(AuthenticatedUser(principal))
        }
    }
}

/// Run the access guard for `level` against the request's `Authorization`
/// header
#[track_caller]
pub(crate) fn authorize(
    parts: &Parts,
    state: &AppState,
    level: AccessLevel,
) -> Result<Principal, ApiError> {
    let header_value = match parts.headers.get(header::AUTHORIZATION) {
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| ApiError::auth_required("Authorization header is not valid ASCII"))?,
        ),
        None => None,
    };

    match state.access_guard.evaluate(header_value, level) {
        AccessOutcome::Authorized(principal) => {
            log::debug!(
                "Identity {} authorized for {} {} (token {})",
                principal.identity_id,
                parts.method,
                parts.uri.path(),
                principal.token_id
            );
            Ok(principal)
        }
        AccessOutcome::Unauthenticated => {
            Err(ApiError::auth_required("missing Authorization header"))
        }
        AccessOutcome::Invalid => Err(ApiError::auth_required("bearer token rejected")),
        AccessOutcome::Forbidden => Err(ApiError::Forbidden {
            message: crate::api::error::ADMIN_REQUIRED_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
