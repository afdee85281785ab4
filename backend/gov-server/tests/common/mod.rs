#![allow(dead_code)]

//! Test infrastructure for gov-server API tests

use gov_server::{AppState, build_router, seed_admin};

use gov_auth::{LoginRateLimiter, PasswordHasher, RateLimitConfig, TokenSettings};
use gov_config::AdminConfig;

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret-key-32-bytes-min";
pub const ADMIN_EMAIL: &str = "admin@city.gov.in";
pub const ADMIN_PASSWORD: &str = "admin-pass-123";

/// Cheap hashing keeps tests fast; production floors this at 10k
const TEST_HASH_ITERATIONS: u32 = 1_000;

pub fn test_token_settings() -> TokenSettings {
    TokenSettings {
        secret: TEST_SECRET.as_bytes().to_vec(),
        issuer: "gov-portal".to_string(),
        audience: "gov-portal-clients".to_string(),
        validity: Duration::from_secs(3600),
        clock_skew: Duration::from_secs(300),
    }
}

/// Create AppState for testing with a fresh in-memory database
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with_limit(RateLimitConfig::default()).await
}

pub async fn create_test_app_state_with_limit(limit: RateLimitConfig) -> AppState {
    let pool = gov_db::open_in_memory_pool()
        .await
        .expect("Failed to create test database");

    AppState::new(
        pool,
        &test_token_settings(),
        PasswordHasher::new(TEST_HASH_ITERATIONS).expect("Failed to create hasher"),
        LoginRateLimiter::new(limit),
        6,
    )
    .expect("Failed to build app state")
}

/// Seed the default administrator the way startup does
pub async fn seed_test_admin(state: &AppState) {
    let admin = AdminConfig {
        email: ADMIN_EMAIL.to_string(),
        password: Some(ADMIN_PASSWORD.to_string()),
        ..AdminConfig::default()
    };
    seed_admin(&state.pool, &state.password_hasher, &admin)
        .await
        .expect("Failed to seed admin");
}

pub fn create_test_app(state: &AppState) -> Router {
    build_router(state.clone())
}

/// Send one request and decode the JSON body (Null when empty or not JSON)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// GET `uri` with a caller-supplied `Authorization` header value
pub async fn get_with_authorization(app: &Router, uri: &str, authorization: &str) -> StatusCode {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("Authorization", authorization)
        .body(Body::empty())
        .unwrap();

    app.clone().oneshot(request).await.unwrap().status()
}

pub async fn register(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/api/v1/auth/register",
        None,
        Some(json!({
            "full_name": "Asha Devi",
            "mobile": "9876543210",
            "email": email,
            "password": password,
            "address": {
                "state": "Karnataka",
                "district": "Mysuru",
                "village": "Hunsur"
            }
        })),
    )
    .await
}

pub async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/api/v1/auth/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await
}

/// Log in and return the bearer token, panicking on failure
pub async fn login_token(app: &Router, email: &str, password: &str) -> String {
    let (status, json) = login(app, email, password).await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", json);
    json["token"].as_str().unwrap().to_string()
}
