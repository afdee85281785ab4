use crate::ApiError;
use crate::api::error::{AUTH_REQUIRED_MESSAGE, LOGIN_FAILED_MESSAGE};

use gov_auth::AuthError;
use gov_db::DbError;

use std::panic::Location;
use std::time::Duration;

use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use http::StatusCode;
use http::header::RETRY_AFTER;
use http_body_util::BodyExt;

async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("email is not a valid address", "email");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_conflict_error_returns_409() {
    let error = ApiError::Conflict {
        message: "An identity with this email already exists".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_login_failures_share_one_body() {
    let unknown = ApiError::login_failed("no identity for email 'x@y.com'").into_response();
    let wrong = ApiError::login_failed("wrong password for identity 7").into_response();

    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let unknown_json = body_json(unknown).await;
    let wrong_json = body_json(wrong).await;

    assert_eq!(unknown_json, wrong_json);
    assert_eq!(unknown_json["error"]["code"], "UNAUTHENTICATED");
    assert_eq!(unknown_json["error"]["message"], LOGIN_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_unauthenticated_body_does_not_leak_reason() {
    let response = ApiError::auth_required("token expired at 12:00").into_response();

    let json = body_json(response).await;
    assert_eq!(json["error"]["message"], AUTH_REQUIRED_MESSAGE);
    assert!(!json.to_string().contains("12:00"));
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let error = ApiError::Forbidden {
        message: "Administrator role required".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_rate_limited_returns_429_with_retry_after() {
    let error = ApiError::RateLimited {
        limit: 10,
        window_secs: 60,
        retry_after_secs: 6,
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.headers()[RETRY_AFTER], "6");

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "RATE_LIMITED");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_db_conflict_converts_to_conflict() {
    let db_error = DbError::Conflict {
        message: "duplicate".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = db_error.into();

    assert!(matches!(api_error, ApiError::Conflict { .. }));
}

#[test]
fn test_db_migration_error_hides_details() {
    let db_error = DbError::Migration {
        message: "checksum mismatch in 20260301000001".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = db_error.into();

    match api_error {
        ApiError::Internal { message, .. } => {
            assert_eq!(message, "Database operation failed");
        }
        other => panic!("Expected Internal, got {:?}", other),
    }
}

#[test]
fn test_token_rejections_convert_to_unauthenticated() {
    let expired = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = expired.into();

    assert!(matches!(
        api_error,
        ApiError::Unauthenticated {
            message: AUTH_REQUIRED_MESSAGE,
            ..
        }
    ));
}

#[test]
fn test_rate_limit_exceeded_converts_to_rate_limited() {
    let exceeded = AuthError::RateLimitExceeded {
        limit: 5,
        window_secs: 30,
        retry_after: Duration::from_millis(5_200),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = exceeded.into();

    assert!(matches!(
        api_error,
        ApiError::RateLimited {
            limit: 5,
            window_secs: 30,
            retry_after_secs: 6,
            ..
        }
    ));
}

#[test]
fn test_auth_configuration_error_converts_to_internal() {
    let config_error = AuthError::Configuration {
        message: "secret too short".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = config_error.into();

    assert!(matches!(api_error, ApiError::Internal { .. }));
}
