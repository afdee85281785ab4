use crate::AddressDto;

use gov_core::Identity;

use serde::Serialize;

/// Identity as returned to clients. Credential material is never included.
#[derive(Debug, Serialize)]
pub struct IdentityDto {
    pub id: i64,
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub role: String,
    pub address: AddressDto,
    pub is_active: bool,
    pub created_at: i64,
    pub last_login_at: Option<i64>,
}

impl From<Identity> for IdentityDto {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            full_name: identity.full_name,
            mobile: identity.mobile,
            email: identity.email,
            role: identity.role.as_str().to_string(),
            address: identity.address.into(),
            is_active: identity.is_active,
            created_at: identity.created_at.timestamp(),
            last_login_at: identity.last_login_at.map(|at| at.timestamp()),
        }
    }
}
