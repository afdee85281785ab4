use crate::AddressDto;

use serde::Deserialize;

/// Missing fields deserialize as empty and are reported by validation with
/// the offending field name.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub full_name: String,

    #[serde(default)]
    pub mobile: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub address: Option<AddressDto>,
}
