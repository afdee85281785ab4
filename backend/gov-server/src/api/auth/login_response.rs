use crate::IdentityDto;

use serde::Serialize;

/// Successful login. The client keeps `token` and sends it back as
/// `Authorization: Bearer <token>`.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Always "Bearer"
    pub token_type: &'static str,
    /// Unix timestamp (seconds)
    pub expires_at: i64,
    pub identity: IdentityDto,
}
