pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::identity::{Address, Identity, IdentityId};
pub use models::new_identity::{MAX_FIELD_LENGTH, NewIdentity};
pub use models::profile_update::ProfileUpdate;
pub use models::role::Role;

#[cfg(test)]
mod tests;
