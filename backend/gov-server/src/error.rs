use thiserror::Error;

/// Startup failures. Any of these stops the process before it binds.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] gov_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] gov_db::DbError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] gov_auth::AuthError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
