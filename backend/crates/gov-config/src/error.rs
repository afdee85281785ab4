use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    /// A value in one `config.toml` section (or its env override) is unusable
    #[error("Invalid {section} settings: {message} {location}")]
    Invalid {
        section: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    fn invalid<S: Into<String>>(section: &'static str, message: S) -> Self {
        ConfigError::Invalid {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Token signing and password policy (`[auth]`)
    #[track_caller]
    pub fn auth<S: Into<String>>(message: S) -> Self {
        Self::invalid("auth", message)
    }

    /// Bootstrap administrator (`[admin]`)
    #[track_caller]
    pub fn admin<S: Into<String>>(message: S) -> Self {
        Self::invalid("admin", message)
    }

    /// Config directory resolution and anything not tied to one section
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::invalid("config", message)
    }

    #[track_caller]
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::invalid("database", message)
    }

    #[track_caller]
    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::invalid("logging", message)
    }

    /// Login throttling (`[rate_limit]`)
    #[track_caller]
    pub fn rate_limit<S: Into<String>>(message: S) -> Self {
        Self::invalid("rate_limit", message)
    }

    #[track_caller]
    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::invalid("server", message)
    }

    /// Section the error belongs to, `None` for IO and parse failures
    pub fn section(&self) -> Option<&'static str> {
        match self {
            ConfigError::Invalid { section, .. } => Some(section),
            ConfigError::Io { .. } | ConfigError::Toml { .. } => None,
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
