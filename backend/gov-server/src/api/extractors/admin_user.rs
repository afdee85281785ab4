use crate::api::extractors::authenticated_user::authorize;
use crate::{ApiError, AppState};

use gov_auth::{AccessLevel, Principal};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Caller with a valid bearer token carrying the Admin role.
///
/// A valid non-admin token is rejected with 403, not 401.
pub struct AdminUser(pub Principal);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let principal = authorize(parts, state, AccessLevel::Admin)?;
            Ok(AdminUser(principal))
        }
    }
}
