use gov_auth::{
    AccessGuard, AuthError, LoginRateLimiter, PasswordHasher, Result as AuthErrorResult,
    StoredCredential, TokenIssuer, TokenSettings, TokenVerifier,
};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Plaintext behind the dummy credential used to equalize unknown-email logins
const DUMMY_PASSWORD: &str = "unknown-identity-placeholder";

/// Shared application state for REST handlers.
///
/// Everything except the pool and the login limiter is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub access_guard: AccessGuard,
    pub token_issuer: Arc<TokenIssuer>,
    pub password_hasher: Arc<PasswordHasher>,
    /// Verified against when the login email is unknown
    pub dummy_credential: Arc<StoredCredential>,
    pub login_limiter: LoginRateLimiter,
    pub password_min_length: usize,
}

impl AppState {
    /// Build issuer, verifier and the dummy credential from `settings`.
    ///
    /// A weak secret or unusable random source fails here, before the
    /// server binds.
    pub fn new(
        pool: SqlitePool,
        settings: &TokenSettings,
        password_hasher: PasswordHasher,
        login_limiter: LoginRateLimiter,
        password_min_length: usize,
    ) -> AuthErrorResult<Self> {
        let token_issuer = TokenIssuer::new(settings)?;
        let token_verifier = TokenVerifier::new(settings)?;
        let dummy_credential = password_hasher.derive(DUMMY_PASSWORD)?;

        Ok(Self {
            pool,
            access_guard: AccessGuard::new(Arc::new(token_verifier)),
            token_issuer: Arc::new(token_issuer),
            password_hasher: Arc::new(password_hasher),
            dummy_credential: Arc::new(dummy_credential),
            login_limiter,
            password_min_length,
        })
    }

    /// Run one full verification against the dummy credential and discard
    /// the result
    pub fn burn_dummy_verification(&self, plaintext: &str) {
        let candidate = if plaintext.is_empty() {
            DUMMY_PASSWORD
        } else {
            plaintext
        };
        let outcome: Result<bool, AuthError> = self.password_hasher.verify(
            candidate,
            &self.dummy_credential.salt,
            &self.dummy_credential.digest,
        );
        if let Err(e) = outcome {
            log::debug!("Dummy verification failed: {}", e);
        }
    }
}
