mod password;

use crate::TokenSettings;

use gov_core::{Address, Identity, IdentityId, Role};

use std::time::Duration;

use chrono::Utc;

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
pub(crate) const OTHER_SECRET: &[u8] = b"another-secret-key-of-32-bytes-or-more";

pub(crate) fn test_settings(secret: &[u8]) -> TokenSettings {
    TokenSettings {
        secret: secret.to_vec(),
        issuer: "gov-portal".to_string(),
        audience: "gov-portal-clients".to_string(),
        validity: Duration::from_secs(3600),
        clock_skew: Duration::from_secs(300),
    }
}

pub(crate) fn test_identity(id: IdentityId, role: Role) -> Identity {
    Identity {
        id,
        full_name: "Asha Devi".to_string(),
        mobile: "9876543210".to_string(),
        email: "asha@example.com".to_string(),
        password_hash: vec![0; 32],
        password_salt: vec![1; 16],
        role,
        address: Address::default(),
        is_active: true,
        created_at: Utc::now(),
        last_login_at: None,
    }
}
