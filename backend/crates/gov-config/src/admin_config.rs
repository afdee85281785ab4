use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_MOBILE, DEFAULT_ADMIN_NAME,
};

use serde::Deserialize;

/// First-run administrator account.
///
/// Seeding only happens when `password` is set and no Admin identity exists yet.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub email: String,
    pub full_name: String,
    pub mobile: String,
    pub password: Option<String>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            email: String::from(DEFAULT_ADMIN_EMAIL),
            full_name: String::from(DEFAULT_ADMIN_NAME),
            mobile: String::from(DEFAULT_ADMIN_MOBILE),
            password: None,
        }
    }
}

impl AdminConfig {
    pub fn seed_enabled(&self) -> bool {
        self.password.is_some()
    }

    pub fn validate(&self, password_min_length: usize) -> ConfigErrorResult<()> {
        let Some(password) = self.password.as_deref() else {
            return Ok(());
        };

        if !self.email.contains('@') {
            return Err(ConfigError::admin(format!(
                "admin.email is not a valid email address: {}",
                self.email
            )));
        }

        if self.full_name.trim().is_empty() || self.mobile.trim().is_empty() {
            return Err(ConfigError::admin(
                "admin.full_name and admin.mobile cannot be empty",
            ));
        }

        if password.chars().count() < password_min_length {
            return Err(ConfigError::admin(format!(
                "admin.password must be at least {} characters",
                password_min_length
            )));
        }

        Ok(())
    }
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("mobile", &self.mobile)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
