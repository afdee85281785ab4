pub mod identity;
pub mod new_identity;
pub mod profile_update;
pub mod role;
