use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;

/// Shortest HS256 secret accepted at startup
pub const MIN_SECRET_LENGTH: usize = 32;

/// Signing secret and claim expectations shared by issuer and verifier.
///
/// Built once from configuration and handed to [`crate::TokenIssuer::new`] and
/// [`crate::TokenVerifier::new`].
#[derive(Clone)]
pub struct TokenSettings {
    pub secret: Vec<u8>,
    pub issuer: String,
    pub audience: String,
    /// How long an issued token stays valid
    pub validity: Duration,
    /// Tolerated clock drift when checking expiry
    pub clock_skew: Duration,
}

impl TokenSettings {
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.secret.len() < MIN_SECRET_LENGTH {
            return Err(AuthError::Configuration {
                message: format!(
                    "signing secret must be at least {} bytes",
                    MIN_SECRET_LENGTH
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.issuer.trim().is_empty() || self.audience.trim().is_empty() {
            return Err(AuthError::Configuration {
                message: "issuer and audience cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.validity.is_zero() {
            return Err(AuthError::Configuration {
                message: "token validity must be greater than zero".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

impl std::fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("validity", &self.validity)
            .field("clock_skew", &self.clock_skew)
            .finish()
    }
}
