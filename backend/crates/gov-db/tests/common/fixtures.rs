use gov_core::{Address, NewIdentity, Role};

/// Creates a resident identity with distinct credential bytes per email
pub fn new_test_identity(email: &str) -> NewIdentity {
    let seed = email.bytes().fold(0u8, |acc, b| acc.wrapping_add(b));
    NewIdentity {
        full_name: "Test Resident".to_string(),
        mobile: "9000000000".to_string(),
        email: email.to_string(),
        password_hash: vec![seed; 32],
        password_salt: email.as_bytes().iter().copied().cycle().take(16).collect(),
        role: Role::Resident,
        address: Address {
            state: Some("Kerala".to_string()),
            district: Some("Ernakulam".to_string()),
            village: None,
            street_address: None,
        },
    }
}
