use crate::{Claims, Result as AuthErrorResult};

use gov_core::{IdentityId, Role};

/// Verified caller identity available to handlers for one request.
/// This is the trusted context after token verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub identity_id: IdentityId,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub token_id: String,
}

impl Principal {
    pub fn from_claims(claims: Claims) -> AuthErrorResult<Self> {
        Ok(Self {
            identity_id: claims.identity_id()?,
            role: claims.role(),
            email: claims.email,
            name: claims.name,
            token_id: claims.jti,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
