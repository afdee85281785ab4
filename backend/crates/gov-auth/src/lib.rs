pub mod access_guard;
pub mod claims;
pub mod error;
pub mod login_rate_limiter;
pub mod password_hasher;
pub mod principal;
pub mod rate_limit_config;
pub mod token_issuer;
pub mod token_settings;
pub mod token_verifier;

pub use access_guard::{AccessGuard, AccessLevel, AccessOutcome, bearer_token};
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use login_rate_limiter::LoginRateLimiter;
pub use password_hasher::{
    DEFAULT_ITERATIONS, DIGEST_LENGTH, MIN_ITERATIONS, PasswordHasher, SALT_LENGTH,
    StoredCredential,
};
pub use principal::Principal;
pub use rate_limit_config::RateLimitConfig;
pub use token_issuer::{IssuedToken, TokenIssuer};
pub use token_settings::{MIN_SECRET_LENGTH, TokenSettings};
pub use token_verifier::TokenVerifier;

#[cfg(test)]
mod tests;
