//! Per-request access decision.
//!
//! ```text
//! NoToken       -> Unauthenticated
//! TokenPresent  -> Verifying -> Valid | Invalid
//! Valid         -> RoleCheck (admin routes) -> Authorized | Forbidden
//! ```
//!
//! Every request is evaluated on its own; nothing is cached between calls.

use crate::{Principal, TokenVerifier};

use std::sync::Arc;

use log::{debug, warn};

const BEARER_SCHEME: &str = "Bearer";

/// What a route requires of its caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    Authenticated,
    Admin,
}

/// Terminal outcome of evaluating one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessOutcome {
    /// No credentials presented
    Unauthenticated,
    /// Credentials presented but rejected (bad scheme, signature, claims, expiry)
    Invalid,
    /// Valid token, insufficient role
    Forbidden,
    Authorized(Principal),
}

#[derive(Clone)]
pub struct AccessGuard {
    verifier: Arc<TokenVerifier>,
}

impl AccessGuard {
    pub fn new(verifier: Arc<TokenVerifier>) -> Self {
        Self { verifier }
    }

    /// Evaluate the raw `Authorization` header value against `level`
    pub fn evaluate(&self, authorization: Option<&str>, level: AccessLevel) -> AccessOutcome {
        let Some(header) = authorization else {
            debug!("Missing Authorization header");
            return AccessOutcome::Unauthenticated;
        };

        let Some(token) = bearer_token(header) else {
            warn!("Invalid authorization scheme: expected 'Bearer'");
            return AccessOutcome::Invalid;
        };

        let principal = match self
            .verifier
            .verify(token)
            .and_then(Principal::from_claims)
        {
            Ok(principal) => principal,
            Err(e) => {
                warn!("Token rejected ({}): {}", e.error_code(), e);
                return AccessOutcome::Invalid;
            }
        };

        if level == AccessLevel::Admin && !principal.is_admin() {
            warn!(
                "Identity {} with role {} denied admin access (token {})",
                principal.identity_id, principal.role, principal.token_id
            );
            return AccessOutcome::Forbidden;
        }

        AccessOutcome::Authorized(principal)
    }
}

/// Extract the token from a `Bearer <token>` header value.
///
/// The scheme name is matched case-insensitively.
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim_start().split_once(char::is_whitespace)?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }
    let token = token.trim();
    if token.is_empty() || token.contains(char::is_whitespace) {
        None
    } else {
        Some(token)
    }
}
