pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod seed;

#[cfg(test)]
mod tests;

pub use api::{
    admin::{
        admin::{list_identities, set_identity_active},
        identity_list_response::IdentityListResponse,
        set_active_request::SetActiveRequest,
    },
    auth::{
        address_dto::AddressDto,
        auth::{get_me, login, register, update_me},
        identity_dto::IdentityDto,
        identity_response::IdentityResponse,
        login_request::LoginRequest,
        login_response::LoginResponse,
        register_request::RegisterRequest,
        update_profile_request::UpdateProfileRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{admin_user::AdminUser, authenticated_user::AuthenticatedUser},
};
pub use app_state::AppState;
pub use seed::{SeedOutcome, seed_admin};

pub use crate::routes::build_router;
