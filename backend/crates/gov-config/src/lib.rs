mod admin_config;
mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod server_config;

pub use admin_config::AdminConfig;
pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;

pub(crate) const CONFIG_DIR_ENV: &str = "GOV_CONFIG_DIR";
pub(crate) const DEFAULT_CONFIG_DIR_NAME: &str = ".gov";
pub(crate) const CONFIG_FILENAME: &str = "config.toml";

// Server
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const MIN_PORT: u16 = 1024;
pub const DEFAULT_MAX_CONNECTIONS: usize = 1000;
pub const MIN_MAX_CONNECTIONS: usize = 1;
pub const MAX_MAX_CONNECTIONS: usize = 100_000;

// Database
pub const DEFAULT_DATABASE_FILENAME: &str = "portal.db";
pub const DEFAULT_DATABASE_POOL_SIZE: u32 = 5;
pub const MIN_DATABASE_POOL_SIZE: u32 = 1;
pub const MAX_DATABASE_POOL_SIZE: u32 = 64;

// Auth
pub const MIN_JWT_SECRET_LENGTH: usize = 32;
pub const DEFAULT_ISSUER: &str = "gov-portal";
pub const DEFAULT_AUDIENCE: &str = "gov-portal-clients";
pub const DEFAULT_TOKEN_VALIDITY_MINS: u64 = 60;
pub const MIN_TOKEN_VALIDITY_MINS: u64 = 1;
pub const MAX_TOKEN_VALIDITY_MINS: u64 = 1440;
pub const DEFAULT_CLOCK_SKEW_SECS: u64 = 300;
pub const MAX_CLOCK_SKEW_SECS: u64 = 600;
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 6;
pub const MIN_PASSWORD_MIN_LENGTH: usize = 4;
pub const MAX_PASSWORD_MIN_LENGTH: usize = 128;
pub const DEFAULT_HASH_ITERATIONS: u32 = 100_000;
pub const MIN_HASH_ITERATIONS: u32 = 10_000;
pub const MAX_HASH_ITERATIONS: u32 = 10_000_000;

// Admin seed
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@gov-portal.local";
pub const DEFAULT_ADMIN_NAME: &str = "Portal Administrator";
pub const DEFAULT_ADMIN_MOBILE: &str = "0000000000";

// Logging
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
