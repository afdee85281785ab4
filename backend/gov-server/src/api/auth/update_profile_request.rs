use crate::AddressDto;

use serde::Deserialize;

/// Partial profile update; absent fields are left unchanged.
/// A present `address` replaces all four address fields.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub mobile: Option<String>,

    #[serde(default)]
    pub address: Option<AddressDto>,
}
