use crate::{AuthError, Claims, Result as AuthErrorResult, TokenSettings};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Production-grade JWT verifier.
///
/// Checks, in order: signature against the configured secret with HS256 only,
/// issuer and audience, expiry with the configured clock-skew leeway, then
/// the claim shape itself.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    #[track_caller]
    pub fn new(settings: &TokenSettings) -> AuthErrorResult<Self> {
        settings.validate()?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = false;
        validation.leeway = settings.clock_skew.as_secs();
        validation.set_issuer(&[settings.issuer.as_str()]);
        validation.set_audience(&[settings.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        Ok(Self {
            decoding_key: DecodingKey::from_secret(&settings.secret),
            validation,
        })
    }

    /// Verify a token and return its claims
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        if token.trim().is_empty() {
            return Err(AuthError::InvalidToken {
                message: "token is empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                    location: ErrorLocation::from(Location::caller()),
                },
                ErrorKind::InvalidIssuer => AuthError::InvalidClaim {
                    claim: "iss".to_string(),
                    message: "unexpected issuer".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
                ErrorKind::InvalidAudience => AuthError::InvalidClaim {
                    claim: "aud".to_string(),
                    message: "unexpected audience".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => AuthError::JwtDecode {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                },
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}
