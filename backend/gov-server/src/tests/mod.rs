mod api;

use crate::AppState;

use gov_auth::{LoginRateLimiter, PasswordHasher, RateLimitConfig, TokenSettings};

use std::time::Duration;

pub(crate) const TEST_SECRET: &str = "unit-test-secret-key-with-32-plus-bytes";

pub(crate) fn test_settings() -> TokenSettings {
    TokenSettings {
        secret: TEST_SECRET.as_bytes().to_vec(),
        issuer: "gov-portal".to_string(),
        audience: "gov-portal-clients".to_string(),
        validity: Duration::from_secs(3600),
        clock_skew: Duration::from_secs(300),
    }
}

pub(crate) async fn test_app_state() -> AppState {
    let pool = gov_db::open_in_memory_pool().await.unwrap();
    AppState::new(
        pool,
        &test_settings(),
        PasswordHasher::new(1_000).unwrap(),
        LoginRateLimiter::new(RateLimitConfig::default()),
        6,
    )
    .unwrap()
}
