//! Identity entity - one registered portal user.

use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage-assigned numeric identity id
pub type IdentityId = i64;

/// Location attributes carried with an identity. Not used by the auth flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub state: Option<String>,
    pub district: Option<String>,
    pub village: Option<String>,
    pub street_address: Option<String>,
}

impl Address {
    /// Name of the first present field longer than `max` bytes
    pub fn oversized_field(&self, max: usize) -> Option<&'static str> {
        [
            ("state", &self.state),
            ("district", &self.district),
            ("village", &self.village),
            ("street_address", &self.street_address),
        ]
        .into_iter()
        .find(|(_, value)| value.as_ref().is_some_and(|v| v.len() > max))
        .map(|(name, _)| name)
    }
}

/// A portal user as persisted by the credential store.
///
/// `password_hash` and `password_salt` are never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub id: IdentityId,
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: Vec<u8>,
    #[serde(skip_serializing)]
    pub password_salt: Vec<u8>,
    pub role: Role,
    pub address: Address,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl Identity {
    /// Whether this identity may currently sign in
    pub fn can_login(&self) -> bool {
        self.is_active
    }
}
