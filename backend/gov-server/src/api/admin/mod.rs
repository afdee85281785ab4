pub mod admin;
pub mod identity_list_response;
pub mod set_active_request;
