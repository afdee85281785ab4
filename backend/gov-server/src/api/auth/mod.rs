pub mod address_dto;
pub mod auth;
pub mod identity_dto;
pub mod identity_response;
pub mod login_request;
pub mod login_response;
pub mod register_request;
pub mod update_profile_request;
