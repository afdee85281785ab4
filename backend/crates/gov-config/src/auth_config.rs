use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AUDIENCE, DEFAULT_CLOCK_SKEW_SECS,
    DEFAULT_HASH_ITERATIONS, DEFAULT_ISSUER, DEFAULT_PASSWORD_MIN_LENGTH,
    DEFAULT_TOKEN_VALIDITY_MINS, MAX_CLOCK_SKEW_SECS, MAX_HASH_ITERATIONS,
    MAX_PASSWORD_MIN_LENGTH, MAX_TOKEN_VALIDITY_MINS, MIN_HASH_ITERATIONS,
    MIN_JWT_SECRET_LENGTH, MIN_PASSWORD_MIN_LENGTH, MIN_TOKEN_VALIDITY_MINS,
};

use std::time::Duration;

use serde::Deserialize;

/// Token signing and credential policy.
///
/// There is no unauthenticated mode: a signing secret is always required.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret (min 32 characters)
    pub jwt_secret: Option<String>,
    pub issuer: String,
    pub audience: String,
    pub token_validity_mins: u64,
    /// Leeway applied when checking `exp`
    pub clock_skew_secs: u64,
    pub password_min_length: usize,
    /// PBKDF2 rounds for newly hashed and verified passwords
    pub hash_iterations: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            issuer: String::from(DEFAULT_ISSUER),
            audience: String::from(DEFAULT_AUDIENCE),
            token_validity_mins: DEFAULT_TOKEN_VALIDITY_MINS,
            clock_skew_secs: DEFAULT_CLOCK_SKEW_SECS,
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            hash_iterations: DEFAULT_HASH_ITERATIONS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self.jwt_secret.as_deref().ok_or_else(|| {
            ConfigError::auth("auth.jwt_secret is required (set GOV_AUTH_JWT_SECRET)")
        })?;

        if secret.chars().count() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if self.issuer.trim().is_empty() {
            return Err(ConfigError::auth("auth.issuer cannot be empty"));
        }

        if self.audience.trim().is_empty() {
            return Err(ConfigError::auth("auth.audience cannot be empty"));
        }

        if !(MIN_TOKEN_VALIDITY_MINS..=MAX_TOKEN_VALIDITY_MINS).contains(&self.token_validity_mins)
        {
            return Err(ConfigError::auth(format!(
                "auth.token_validity_mins must be {}-{}, got {}",
                MIN_TOKEN_VALIDITY_MINS, MAX_TOKEN_VALIDITY_MINS, self.token_validity_mins
            )));
        }

        if self.clock_skew_secs > MAX_CLOCK_SKEW_SECS {
            return Err(ConfigError::auth(format!(
                "auth.clock_skew_secs must be 0-{}, got {}",
                MAX_CLOCK_SKEW_SECS, self.clock_skew_secs
            )));
        }

        if !(MIN_PASSWORD_MIN_LENGTH..=MAX_PASSWORD_MIN_LENGTH).contains(&self.password_min_length)
        {
            return Err(ConfigError::auth(format!(
                "auth.password_min_length must be {}-{}, got {}",
                MIN_PASSWORD_MIN_LENGTH, MAX_PASSWORD_MIN_LENGTH, self.password_min_length
            )));
        }

        if !(MIN_HASH_ITERATIONS..=MAX_HASH_ITERATIONS).contains(&self.hash_iterations) {
            return Err(ConfigError::auth(format!(
                "auth.hash_iterations must be {}-{}, got {}",
                MIN_HASH_ITERATIONS, MAX_HASH_ITERATIONS, self.hash_iterations
            )));
        }

        Ok(())
    }

    pub fn token_validity(&self) -> Duration {
        Duration::from_secs(self.token_validity_mins * 60)
    }

    pub fn clock_skew(&self) -> Duration {
        Duration::from_secs(self.clock_skew_secs)
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("token_validity_mins", &self.token_validity_mins)
            .field("clock_skew_secs", &self.clock_skew_secs)
            .field("password_min_length", &self.password_min_length)
            .field("hash_iterations", &self.hash_iterations)
            .finish()
    }
}
