use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Portal role carried by every identity and every token.
///
/// Stored values are limited to `Admin` and `Resident` by the schema. Role
/// strings read from token claims go through [`Role::from_claim`], which maps
/// anything else to [`Role::Unrecognized`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// Municipal administrator, may review and manage identities
    Admin,
    /// Ordinary resident account, the registration default
    #[default]
    Resident,
    /// Claim value outside the known set. Never granted admin access.
    Unrecognized,
}

impl Role {
    /// Convert to database / claim string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Resident => "Resident",
            Self::Unrecognized => "Unrecognized",
        }
    }

    /// Lenient parse used at the token boundary
    pub fn from_claim(value: &str) -> Self {
        Self::from_str(value).unwrap_or(Self::Unrecognized)
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "Admin" => Ok(Self::Admin),
            "Resident" => Ok(Self::Resident),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
