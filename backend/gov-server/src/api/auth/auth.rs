//! Registration, login and self-service profile handlers

use crate::{
    AddressDto, ApiError, ApiResult, AppState, AuthenticatedUser, IdentityDto, IdentityResponse,
    LoginRequest, LoginResponse, RegisterRequest, UpdateProfileRequest,
};

use gov_auth::{AuthError, PasswordHasher, Result as AuthErrorResult};
use gov_core::{MAX_FIELD_LENGTH, NewIdentity, ProfileUpdate, Role};
use gov_db::IdentityRepository;

use std::panic::Location;
use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;
use error_location::ErrorLocation;
use log::info;

const TOKEN_TYPE: &str = "Bearer";

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/auth/register
///
/// Create a Resident identity. No token is issued; the client logs in next.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<IdentityResponse>)> {
    let Json(request) = payload?;

    let email = validate_registration(&request, state.password_min_length)?;

    let password = request.password;
    let credential = run_hasher(&state, move |hasher| hasher.derive(&password)).await?;

    let new_identity = NewIdentity {
        full_name: request.full_name.trim().to_string(),
        mobile: request.mobile.trim().to_string(),
        email,
        password_hash: credential.digest,
        password_salt: credential.salt,
        role: Role::Resident,
        address: request.address.unwrap_or_default().into(),
    };

    let repo = IdentityRepository::new(state.pool.clone());
    let identity = repo.create(&new_identity).await?;

    info!("Registered identity {} with role {}", identity.id, identity.role);

    Ok((
        StatusCode::CREATED,
        Json(IdentityResponse {
            identity: identity.into(),
        }),
    ))
}

/// POST /api/v1/auth/login
///
/// Exchange email and password for a bearer token. Every credential failure
/// returns the same 401 body, and an unknown email still costs one full
/// key derivation.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(request) = payload?;
    let email = NewIdentity::normalize_email(&request.email);

    state.login_limiter.check(&email)?;

    let repo = IdentityRepository::new(state.pool.clone());
    let password = request.password;

    let Some(identity) = repo.find_by_email(&email).await? else {
        let dummy_state = state.clone();
        tokio::task::spawn_blocking(move || dummy_state.burn_dummy_verification(&password))
            .await
            .map_err(join_error)?;
        return Err(ApiError::login_failed(format!(
            "no identity for email '{}'",
            email
        )));
    };

    let salt = identity.password_salt.clone();
    let digest = identity.password_hash.clone();
    let verified = run_hasher(&state, move |hasher| {
        match hasher.verify(&password, &salt, &digest) {
            // Empty password: a plain mismatch, not a 400
            Err(AuthError::InvalidInput { .. }) => Ok(false),
            other => other,
        }
    })
    .await?;

    if !verified {
        return Err(ApiError::login_failed(format!(
            "wrong password for identity {}",
            identity.id
        )));
    }

    if !identity.can_login() {
        return Err(ApiError::login_failed(format!(
            "identity {} is deactivated",
            identity.id
        )));
    }

    let issued = state.token_issuer.issue(&identity)?;

    let now = Utc::now();
    repo.record_login(identity.id, now).await?;

    info!(
        "Identity {} logged in as {} (token {})",
        identity.id, identity.role, issued.token_id
    );

    let mut identity = identity;
    identity.last_login_at = Some(now);

    Ok(Json(LoginResponse {
        token: issued.token,
        token_type: TOKEN_TYPE,
        expires_at: issued.expires_at.timestamp(),
        identity: identity.into(),
    }))
}

/// GET /api/v1/auth/me
pub async fn get_me(
    AuthenticatedUser(principal): AuthenticatedUser,
    State(state): State<AppState>,
) -> ApiResult<Json<IdentityResponse>> {
    let repo = IdentityRepository::new(state.pool.clone());
    let identity = repo
        .find_by_id(principal.identity_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Identity {} not found", principal.identity_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(IdentityResponse {
        identity: IdentityDto::from(identity),
    }))
}

/// PUT /api/v1/auth/me
///
/// Update name, mobile and/or address of the calling identity
pub async fn update_me(
    AuthenticatedUser(principal): AuthenticatedUser,
    State(state): State<AppState>,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> ApiResult<Json<IdentityResponse>> {
    let Json(request) = payload?;

    if let Some(ref full_name) = request.full_name {
        validate_text(full_name, "full_name")?;
    }
    if let Some(ref mobile) = request.mobile {
        validate_text(mobile, "mobile")?;
    }
    if let Some(ref address) = request.address {
        validate_address(address)?;
    }

    let update = ProfileUpdate {
        full_name: request.full_name,
        mobile: request.mobile,
        address: request.address.map(Into::into),
    };

    if update.is_empty() {
        return Err(ApiError::BadRequest {
            message: "No profile fields to update".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let repo = IdentityRepository::new(state.pool.clone());
    let identity = repo
        .update_profile(principal.identity_id, &update)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Identity {} not found", principal.identity_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    info!("Identity {} updated its profile", identity.id);

    Ok(Json(IdentityResponse {
        identity: identity.into(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

/// Check registration input and return the normalized email
fn validate_registration(
    request: &RegisterRequest,
    password_min_length: usize,
) -> ApiResult<String> {
    validate_text(&request.full_name, "full_name")?;
    validate_text(&request.mobile, "mobile")?;
    if let Some(ref address) = request.address {
        validate_address(address)?;
    }

    let email = NewIdentity::normalize_email(&request.email);
    if email.is_empty() {
        return Err(ApiError::validation("email is required", "email"));
    }
    if email.len() > MAX_FIELD_LENGTH || !is_valid_email(&email) {
        return Err(ApiError::validation("email is not a valid address", "email"));
    }

    if request.password.is_empty() {
        return Err(ApiError::validation("password is required", "password"));
    }
    if request.password.chars().count() < password_min_length {
        return Err(ApiError::validation(
            format!(
                "password must be at least {} characters",
                password_min_length
            ),
            "password",
        ));
    }

    Ok(email)
}

fn validate_text(value: &str, field: &str) -> ApiResult<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(format!("{} is required", field), field));
    }
    if trimmed.len() > MAX_FIELD_LENGTH {
        return Err(ApiError::validation(
            format!("{} must be at most {} characters", field, MAX_FIELD_LENGTH),
            field,
        ));
    }
    Ok(())
}

/// Address fields are optional, but bounded like every other text field
fn validate_address(address: &AddressDto) -> ApiResult<()> {
    let fields = [
        ("address.state", &address.state),
        ("address.district", &address.district),
        ("address.village", &address.village),
        ("address.street_address", &address.street_address),
    ];
    for (field, value) in fields {
        if value.as_deref().is_some_and(|v| v.trim().len() > MAX_FIELD_LENGTH) {
            return Err(ApiError::validation(
                format!("{} must be at most {} characters", field, MAX_FIELD_LENGTH),
                field,
            ));
        }
    }
    Ok(())
}

/// `local@domain.tld` shape check: one `@`, no whitespace, dotted domain
pub(crate) fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

/// Run KDF work off the async runtime
async fn run_hasher<T, F>(state: &AppState, work: F) -> ApiResult<T>
where
    F: FnOnce(&PasswordHasher) -> AuthErrorResult<T> + Send + 'static,
    T: Send + 'static,
{
    let hasher = Arc::clone(&state.password_hasher);
    let result = tokio::task::spawn_blocking(move || work(&hasher))
        .await
        .map_err(join_error)?;

    Ok(result?)
}

#[track_caller]
fn join_error(e: tokio::task::JoinError) -> ApiError {
    ApiError::Internal {
        message: format!("Password hashing task failed: {}", e),
        location: ErrorLocation::from(Location::caller()),
    }
}
