use crate::{
    AdminConfig, AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, LoggingConfig, RateLimitConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub admin: AdminConfig,
    pub rate_limit: RateLimitConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for GOV_CONFIG_DIR env var, else use ./.gov/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply GOV_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: GOV_CONFIG_DIR env var > ./.gov/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load(); any error here is fatal at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.admin.validate(self.auth.password_min_length)?;
        self.rate_limit.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} connections)",
            self.server.host, self.server.port, self.server.max_connections
        );
        info!(
            "  database: {} (pool {})",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: HS256 iss={} aud={} validity={}m skew={}s secret={}",
            self.auth.issuer,
            self.auth.audience,
            self.auth.token_validity_mins,
            self.auth.clock_skew_secs,
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            }
        );
        info!(
            "  passwords: min_length={}, pbkdf2 iterations={}",
            self.auth.password_min_length, self.auth.hash_iterations
        );
        info!(
            "  admin seed: {}",
            if self.admin.seed_enabled() {
                self.admin.email.as_str()
            } else {
                "disabled"
            }
        );
        info!(
            "  rate_limit: {}/{}s per login email",
            self.rate_limit.max_requests, self.rate_limit.window_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("none")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("GOV_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("GOV_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "GOV_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );

        // Database
        Self::apply_env_string("GOV_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "GOV_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("GOV_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_string("GOV_AUTH_ISSUER", &mut self.auth.issuer);
        Self::apply_env_string("GOV_AUTH_AUDIENCE", &mut self.auth.audience);
        Self::apply_env_parse(
            "GOV_AUTH_TOKEN_VALIDITY_MINS",
            &mut self.auth.token_validity_mins,
        );
        Self::apply_env_parse("GOV_AUTH_CLOCK_SKEW_SECS", &mut self.auth.clock_skew_secs);
        Self::apply_env_parse(
            "GOV_AUTH_PASSWORD_MIN_LENGTH",
            &mut self.auth.password_min_length,
        );
        Self::apply_env_parse("GOV_AUTH_HASH_ITERATIONS", &mut self.auth.hash_iterations);

        // Admin seed
        Self::apply_env_string("GOV_ADMIN_EMAIL", &mut self.admin.email);
        Self::apply_env_string("GOV_ADMIN_NAME", &mut self.admin.full_name);
        Self::apply_env_string("GOV_ADMIN_MOBILE", &mut self.admin.mobile);
        Self::apply_env_option_string("GOV_ADMIN_PASSWORD", &mut self.admin.password);

        // Rate limit
        Self::apply_env_parse(
            "GOV_RATE_LIMIT_MAX_REQUESTS",
            &mut self.rate_limit.max_requests,
        );
        Self::apply_env_parse(
            "GOV_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        );

        // Logging
        Self::apply_env_parse("GOV_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("GOV_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("GOV_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("GOV_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
