use gov_core::Address;

use serde::{Deserialize, Serialize};

/// Optional location attributes, carried as-is
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressDto {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub street_address: Option<String>,
}

impl From<Address> for AddressDto {
    fn from(address: Address) -> Self {
        Self {
            state: address.state,
            district: address.district,
            village: address.village,
            street_address: address.street_address,
        }
    }
}

impl From<AddressDto> for Address {
    fn from(dto: AddressDto) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            state: clean(dto.state),
            district: clean(dto.district),
            village: clean(dto.village),
            street_address: clean(dto.street_address),
        }
    }
}
