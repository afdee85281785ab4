use crate::{AuthError, Result as AuthErrorResult};

use gov_core::{IdentityId, Role};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims issued at login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (identity id, decimal string)
    pub sub: String,
    pub email: String,
    /// Display name
    pub name: String,
    pub role: String,
    /// Unique token id, for tracing only
    pub jti: String,
    pub iss: String,
    pub aud: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (identity id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.parse::<IdentityId>().is_err() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub must be a numeric identity id".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.email.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "email".to_string(),
                message: "email cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.jti.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "jti".to_string(),
                message: "jti cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    #[track_caller]
    pub fn identity_id(&self) -> AuthErrorResult<IdentityId> {
        self.sub.parse().map_err(|_| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: "sub must be a numeric identity id".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Role claim parsed into the closed role set
    pub fn role(&self) -> Role {
        Role::from_claim(&self.role)
    }
}
