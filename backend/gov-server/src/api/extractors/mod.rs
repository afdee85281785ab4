pub mod admin_user;
pub mod authenticated_user;
