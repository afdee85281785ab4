//! Salted password hashing with PBKDF2-HMAC-SHA256.
//!
//! Digests are a fixed [`DIGEST_LENGTH`] bytes and salts a fixed
//! [`SALT_LENGTH`] bytes drawn from the operating system's CSPRNG. The
//! iteration count comes from configuration and is never request-supplied.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use rand::TryRngCore;
use rand::rngs::OsRng;
use sha2::Sha256;

pub const SALT_LENGTH: usize = 16;
pub const DIGEST_LENGTH: usize = 32;
pub const DEFAULT_ITERATIONS: u32 = 100_000;
/// Lowest iteration count accepted from configuration
pub const MIN_ITERATIONS: u32 = 10_000;

/// Salt and digest pair as persisted in the credential store
#[derive(Clone, PartialEq, Eq)]
pub struct StoredCredential {
    pub salt: Vec<u8>,
    pub digest: Vec<u8>,
}

impl std::fmt::Debug for StoredCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredCredential")
            .field("salt_len", &self.salt.len())
            .field("digest_len", &self.digest.len())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct PasswordHasher {
    iterations: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl PasswordHasher {
    /// Create a hasher with an explicit iteration count.
    ///
    /// Startup configuration enforces [`MIN_ITERATIONS`]; this constructor only
    /// rejects zero so tests can use cheap hashers.
    #[track_caller]
    pub fn new(iterations: u32) -> AuthErrorResult<Self> {
        if iterations == 0 {
            return Err(AuthError::Configuration {
                message: "hash iterations must be greater than zero".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { iterations })
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Fresh random salt from the OS random source
    #[track_caller]
    pub fn generate_salt() -> AuthErrorResult<Vec<u8>> {
        let mut salt = vec![0u8; SALT_LENGTH];
        OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| AuthError::Rng {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        Ok(salt)
    }

    /// Derive the digest for `plaintext` under `salt`.
    #[track_caller]
    pub fn hash(&self, plaintext: &str, salt: &[u8]) -> AuthErrorResult<Vec<u8>> {
        if plaintext.is_empty() {
            return Err(AuthError::InvalidInput {
                message: "password cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if salt.len() != SALT_LENGTH {
            return Err(AuthError::InvalidInput {
                message: format!(
                    "salt must be {} bytes, got {}",
                    SALT_LENGTH,
                    salt.len()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut digest = vec![0u8; DIGEST_LENGTH];
        pbkdf2::pbkdf2_hmac::<Sha256>(plaintext.as_bytes(), salt, self.iterations, &mut digest);
        Ok(digest)
    }

    /// Generate a salt and derive the digest in one step (registration path)
    #[track_caller]
    pub fn derive(&self, plaintext: &str) -> AuthErrorResult<StoredCredential> {
        let salt = Self::generate_salt()?;
        let digest = self.hash(plaintext, &salt)?;
        Ok(StoredCredential { salt, digest })
    }

    /// Check `plaintext` against a stored digest. Comparison is constant-time.
    #[track_caller]
    pub fn verify(&self, plaintext: &str, salt: &[u8], digest: &[u8]) -> AuthErrorResult<bool> {
        let candidate = self.hash(plaintext, salt)?;
        Ok(constant_time_eq(&candidate, digest))
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).fold(0, |acc, (x, y)| acc | (x ^ y)) == 0
}
