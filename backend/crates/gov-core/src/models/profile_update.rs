use crate::Address;

/// Profile fields an identity may change about itself
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<Address>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.mobile.is_none() && self.address.is_none()
    }
}
