//! Identity repository - the portal's credential store.
//!
//! Email uniqueness is case-insensitive and enforced by a unique index on
//! `email COLLATE NOCASE`, so concurrent duplicate registrations are decided
//! by SQLite. The losing insert surfaces as [`DbError::Conflict`].

use crate::{DbError, Result as DbErrorResult};

use gov_core::{Address, Identity, IdentityId, NewIdentity, ProfileUpdate, Role};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Column named by SQLite when the email unique index rejects an insert
const EMAIL_COLUMN: &str = "identities.email";

const SELECT_COLUMNS: &str = r#"
    id, full_name, mobile, email, password_hash, password_salt, role,
    state, district, village, street_address,
    is_active, created_at, last_login_at
"#;

pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new identity and return it as stored.
    pub async fn create(&self, identity: &NewIdentity) -> DbErrorResult<Identity> {
        identity.validate()?;

        let email = NewIdentity::normalize_email(&identity.email);
        let role = identity.role.as_str();
        let created_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO identities (
                    full_name, mobile, email, password_hash, password_salt, role,
                    state, district, village, street_address,
                    is_active, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 1, ?)
            "#,
        )
        .bind(identity.full_name.trim())
        .bind(identity.mobile.trim())
        .bind(&email)
        .bind(&identity.password_hash)
        .bind(&identity.password_salt)
        .bind(role)
        .bind(&identity.address.state)
        .bind(&identity.address.district)
        .bind(&identity.address.village)
        .bind(&identity.address.street_address)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            // Only the email index maps to Conflict; other unique failures stay internal
            sqlx::Error::Database(ref db_err)
                if db_err.is_unique_violation() && db_err.message().contains(EMAIL_COLUMN) =>
            {
                DbError::Conflict {
                    message: "An identity with this email already exists".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            other => DbError::from(other),
        })?;

        let id = result.last_insert_rowid();
        log::debug!("Created identity {} with role {}", id, role);

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::Initialization {
                message: format!("identity {} missing after insert", id),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub async fn find_by_id(&self, id: IdentityId) -> DbErrorResult<Option<Identity>> {
        let sql = format!("SELECT {} FROM identities WHERE id = ?", SELECT_COLUMNS);

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_identity).transpose()
    }

    /// Case-insensitive lookup by email
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let sql = format!(
            "SELECT {} FROM identities WHERE email = ? COLLATE NOCASE",
            SELECT_COLUMNS
        );

        let row = sqlx::query(&sql)
            .bind(NewIdentity::normalize_email(email))
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_identity).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Identity>> {
        let sql = format!("SELECT {} FROM identities ORDER BY id ASC", SELECT_COLUMNS);

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(map_identity).collect()
    }

    /// Whether at least one identity holds the given role
    pub async fn role_exists(&self, role: Role) -> DbErrorResult<bool> {
        let count: i64 = sqlx::query("SELECT COUNT(*) AS count FROM identities WHERE role = ?")
            .bind(role.as_str())
            .fetch_one(&self.pool)
            .await?
            .try_get("count")?;

        Ok(count > 0)
    }

    pub async fn record_login(&self, id: IdentityId, at: DateTime<Utc>) -> DbErrorResult<()> {
        sqlx::query("UPDATE identities SET last_login_at = ? WHERE id = ?")
            .bind(at.timestamp())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Apply a profile update. Returns `None` when the identity does not exist.
    pub async fn update_profile(
        &self,
        id: IdentityId,
        update: &ProfileUpdate,
    ) -> DbErrorResult<Option<Identity>> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
                UPDATE identities
                SET full_name = COALESCE(?, full_name),
                    mobile = COALESCE(?, mobile)
                WHERE id = ?
            "#,
        )
        .bind(update.full_name.as_deref().map(str::trim))
        .bind(update.mobile.as_deref().map(str::trim))
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        if let Some(ref address) = update.address {
            sqlx::query(
                r#"
                    UPDATE identities
                    SET state = ?, district = ?, village = ?, street_address = ?
                    WHERE id = ?
                "#,
            )
            .bind(&address.state)
            .bind(&address.district)
            .bind(&address.village)
            .bind(&address.street_address)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        self.find_by_id(id).await
    }

    /// Activate or deactivate an identity. Returns false if it does not exist.
    pub async fn set_active(&self, id: IdentityId, active: bool) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE identities SET is_active = ? WHERE id = ?")
            .bind(active)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_identity(row: &SqliteRow) -> DbErrorResult<Identity> {
    let role: String = row.try_get("role")?;
    let created_at: i64 = row.try_get("created_at")?;
    let last_login_at: Option<i64> = row.try_get("last_login_at")?;

    Ok(Identity {
        id: row.try_get("id")?,
        full_name: row.try_get("full_name")?,
        mobile: row.try_get("mobile")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        password_salt: row.try_get("password_salt")?,
        role: Role::from_str(&role).map_err(|e| DbError::Initialization {
            message: format!("Invalid Role in identities.role: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        address: Address {
            state: row.try_get("state")?,
            district: row.try_get("district")?,
            village: row.try_get("village")?,
            street_address: row.try_get("street_address")?,
        },
        is_active: row.try_get("is_active")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in identities.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        last_login_at: last_login_at
            .map(|ts| {
                DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::Initialization {
                    message: "Invalid timestamp in identities.last_login_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
            })
            .transpose()?,
    })
}
