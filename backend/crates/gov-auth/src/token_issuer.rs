use crate::{AuthError, Claims, Result as AuthErrorResult, TokenSettings};

use gov_core::Identity;

use std::panic::Location;

use chrono::{DateTime, TimeDelta, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use log::debug;
use uuid::Uuid;

/// Signed bearer token handed to the client at login
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub token_id: String,
    pub expires_at: DateTime<Utc>,
}

/// HS256 token issuer
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    header: Header,
    issuer: String,
    audience: String,
    validity: TimeDelta,
}

impl TokenIssuer {
    /// Build the issuer. Fails on a weak or missing secret, which callers
    /// treat as fatal at startup.
    #[track_caller]
    pub fn new(settings: &TokenSettings) -> AuthErrorResult<Self> {
        settings.validate()?;

        let validity =
            TimeDelta::from_std(settings.validity).map_err(|e| AuthError::Configuration {
                message: format!("token validity out of range: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(&settings.secret),
            header: Header::new(Algorithm::HS256),
            issuer: settings.issuer.clone(),
            audience: settings.audience.clone(),
            validity,
        })
    }

    /// Issue a token for `identity`, valid from now
    #[track_caller]
    pub fn issue(&self, identity: &Identity) -> AuthErrorResult<IssuedToken> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue a token as if the current time were `issued_at`
    #[track_caller]
    pub fn issue_at(
        &self,
        identity: &Identity,
        issued_at: DateTime<Utc>,
    ) -> AuthErrorResult<IssuedToken> {
        if identity.email.is_empty() || identity.full_name.is_empty() {
            return Err(AuthError::InvalidInput {
                message: "identity must have email and display name".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let expires_at = issued_at + self.validity;
        let token_id = Uuid::new_v4().to_string();

        let claims = Claims {
            sub: identity.id.to_string(),
            email: identity.email.clone(),
            name: identity.full_name.clone(),
            role: identity.role.as_str().to_string(),
            jti: token_id.clone(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&self.header, &claims, &self.encoding_key).map_err(|e| {
            AuthError::Signing {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        debug!(
            "Issued token {} for identity {} (expires {})",
            token_id,
            identity.id,
            expires_at.to_rfc3339()
        );

        Ok(IssuedToken {
            token,
            token_id,
            expires_at,
        })
    }
}
