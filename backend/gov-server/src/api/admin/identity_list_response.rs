use crate::IdentityDto;

use serde::Serialize;

/// List of identities response
#[derive(Debug, Serialize)]
pub struct IdentityListResponse {
    pub identities: Vec<IdentityDto>,
}
