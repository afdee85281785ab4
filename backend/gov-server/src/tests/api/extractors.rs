use crate::tests::{test_app_state, test_settings};
use crate::{AdminUser, ApiError, AuthenticatedUser};

use gov_auth::TokenIssuer;
use gov_core::{Address, Identity, Role};

use axum::extract::FromRequestParts;
use chrono::Utc;
use http::Request;
use http::request::Parts;

fn identity(id: i64, role: Role) -> Identity {
    Identity {
        id,
        full_name: "Ravi Kumar".to_string(),
        mobile: "9123456780".to_string(),
        email: format!("user{}@example.com", id),
        password_hash: vec![0; 32],
        password_salt: vec![1; 16],
        role,
        address: Address::default(),
        is_active: true,
        created_at: Utc::now(),
        last_login_at: None,
    }
}

fn bearer(role: Role) -> String {
    let issuer = TokenIssuer::new(&test_settings()).unwrap();
    format!("Bearer {}", issuer.issue(&identity(11, role)).unwrap().token)
}

fn parts(authorization: Option<&str>) -> Parts {
    let mut builder = Request::builder().uri("/api/v1/auth/me");
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    builder.body(()).unwrap().into_parts().0
}

#[tokio::test]
async fn test_authenticated_user_from_valid_token() {
    let state = test_app_state().await;
    let mut parts = parts(Some(&bearer(Role::Resident)));

    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    let AuthenticatedUser(principal) = result.unwrap();
    assert_eq!(principal.identity_id, 11);
    assert_eq!(principal.role, Role::Resident);
}

#[tokio::test]
async fn test_authenticated_user_accepts_lowercase_scheme() {
    let state = test_app_state().await;
    let header = bearer(Role::Resident).replacen("Bearer", "bearer", 1);
    let mut parts = parts(Some(&header));

    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    let AuthenticatedUser(principal) = result.unwrap();
    assert_eq!(principal.identity_id, 11);
}

#[tokio::test]
async fn test_authenticated_user_missing_header_is_unauthenticated() {
    let state = test_app_state().await;
    let mut parts = parts(None);

    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthenticated { .. })));
}

#[tokio::test]
async fn test_authenticated_user_wrong_scheme_is_unauthenticated() {
    let state = test_app_state().await;
    let mut parts = parts(Some("Token abc"));

    let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthenticated { .. })));
}

#[tokio::test]
async fn test_admin_user_with_resident_token_is_forbidden() {
    let state = test_app_state().await;
    let mut parts = parts(Some(&bearer(Role::Resident)));

    let result = AdminUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[tokio::test]
async fn test_admin_user_with_admin_token_is_authorized() {
    let state = test_app_state().await;
    let mut parts = parts(Some(&bearer(Role::Admin)));

    let result = AdminUser::from_request_parts(&mut parts, &state).await;

    let AdminUser(principal) = result.unwrap();
    assert!(principal.is_admin());
}

#[tokio::test]
async fn test_admin_user_with_garbage_token_is_unauthenticated_not_forbidden() {
    let state = test_app_state().await;
    let mut parts = parts(Some("Bearer not-a-jwt"));

    let result = AdminUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthenticated { .. })));
}
