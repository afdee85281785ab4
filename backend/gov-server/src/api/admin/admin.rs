//! Administrator-only identity management

use crate::{
    AdminUser, ApiError, ApiResult, AppState, IdentityDto, IdentityListResponse,
    IdentityResponse, SetActiveRequest,
};

use gov_core::IdentityId;
use gov_db::IdentityRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use error_location::ErrorLocation;
use log::info;

/// GET /api/v1/admin/identities
///
/// List all identities, oldest first
pub async fn list_identities(
    AdminUser(admin): AdminUser,
    State(state): State<AppState>,
) -> ApiResult<Json<IdentityListResponse>> {
    let repo = IdentityRepository::new(state.pool.clone());
    let identities = repo.find_all().await?;

    log::debug!(
        "Admin {} listed {} identities",
        admin.identity_id,
        identities.len()
    );

    Ok(Json(IdentityListResponse {
        identities: identities.into_iter().map(IdentityDto::from).collect(),
    }))
}

/// PUT /api/v1/admin/identities/{id}/active
///
/// Activate or deactivate an identity. Deactivated identities cannot log in;
/// tokens they already hold stay valid until expiry.
pub async fn set_identity_active(
    AdminUser(admin): AdminUser,
    State(state): State<AppState>,
    path: Result<Path<IdentityId>, PathRejection>,
    payload: Result<Json<SetActiveRequest>, JsonRejection>,
) -> ApiResult<Json<IdentityResponse>> {
    let Path(id) = path?;
    let Json(request) = payload?;

    if id == admin.identity_id && !request.is_active {
        return Err(ApiError::validation(
            "administrators cannot deactivate themselves",
            "is_active",
        ));
    }

    let repo = IdentityRepository::new(state.pool.clone());

    if !repo.set_active(id, request.is_active).await? {
        return Err(ApiError::NotFound {
            message: format!("Identity {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let identity = repo.find_by_id(id).await?.ok_or_else(|| ApiError::NotFound {
        message: format!("Identity {} not found", id),
        location: ErrorLocation::from(Location::caller()),
    })?;

    info!(
        "Admin {} set identity {} active={}",
        admin.identity_id, id, request.is_active
    );

    Ok(Json(IdentityResponse {
        identity: identity.into(),
    }))
}
