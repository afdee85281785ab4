//! First-run administrator seeding

use crate::error::Result as ServerErrorResult;

use gov_auth::PasswordHasher;
use gov_config::AdminConfig;
use gov_core::{Address, IdentityId, NewIdentity, Role};
use gov_db::{DbError, IdentityRepository};

use log::{info, warn};
use sqlx::SqlitePool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// No admin password configured
    Disabled,
    /// An Admin identity already exists
    AlreadyPresent,
    /// The configured email belongs to an existing identity
    EmailTaken,
    Created(IdentityId),
}

/// Create the configured administrator unless an Admin identity exists.
pub async fn seed_admin(
    pool: &SqlitePool,
    hasher: &PasswordHasher,
    admin: &AdminConfig,
) -> ServerErrorResult<SeedOutcome> {
    let Some(ref password) = admin.password else {
        return Ok(SeedOutcome::Disabled);
    };

    let repo = IdentityRepository::new(pool.clone());

    if repo.role_exists(Role::Admin).await? {
        info!("Admin identity already present, skipping seed");
        return Ok(SeedOutcome::AlreadyPresent);
    }

    let credential = hasher.derive(password)?;

    let new_identity = NewIdentity {
        full_name: admin.full_name.clone(),
        mobile: admin.mobile.clone(),
        email: NewIdentity::normalize_email(&admin.email),
        password_hash: credential.digest,
        password_salt: credential.salt,
        role: Role::Admin,
        address: Address::default(),
    };

    match repo.create(&new_identity).await {
        Ok(identity) => {
            info!(
                "Seeded administrator identity {} ({})",
                identity.id, identity.email
            );
            Ok(SeedOutcome::Created(identity.id))
        }
        Err(DbError::Conflict { .. }) => {
            warn!(
                "Cannot seed administrator: {} is already registered as a non-admin",
                new_identity.email
            );
            Ok(SeedOutcome::EmailTaken)
        }
        Err(e) => Err(e.into()),
    }
}
