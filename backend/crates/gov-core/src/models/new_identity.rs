use crate::{Address, CoreError, Result as CoreErrorResult, Role};

use std::panic::Location;

use error_location::ErrorLocation;

/// Maximum accepted length for free-text identity fields
pub const MAX_FIELD_LENGTH: usize = 255;

/// Identity about to be inserted. The credential fields are already derived;
/// plaintext never reaches this type.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub password_hash: Vec<u8>,
    pub password_salt: Vec<u8>,
    pub role: Role,
    pub address: Address,
}

impl NewIdentity {
    /// Normalize an email for storage and lookup
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Structural checks that hold for every stored identity
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.full_name.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "full_name cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.email.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "email cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.full_name.len() > MAX_FIELD_LENGTH || self.email.len() > MAX_FIELD_LENGTH {
            return Err(CoreError::Validation {
                message: format!("fields must be at most {} characters", MAX_FIELD_LENGTH),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.mobile.len() > MAX_FIELD_LENGTH {
            return Err(CoreError::Validation {
                message: format!("mobile must be at most {} characters", MAX_FIELD_LENGTH),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if let Some(field) = self.address.oversized_field(MAX_FIELD_LENGTH) {
            return Err(CoreError::Validation {
                message: format!(
                    "address.{} must be at most {} characters",
                    field, MAX_FIELD_LENGTH
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.password_hash.is_empty() || self.password_salt.is_empty() {
            return Err(CoreError::Validation {
                message: "credential material missing".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.role == Role::Unrecognized {
            return Err(CoreError::InvalidRole {
                value: self.role.as_str().to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
