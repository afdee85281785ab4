use crate::{Address, CoreError, MAX_FIELD_LENGTH, NewIdentity, Role};

fn valid_identity() -> NewIdentity {
    NewIdentity {
        full_name: "Asha Devi".to_string(),
        mobile: "9876543210".to_string(),
        email: "asha@example.com".to_string(),
        password_hash: vec![1; 32],
        password_salt: vec![2; 16],
        role: Role::Resident,
        address: Address::default(),
    }
}

#[test]
fn test_normalize_email_trims_and_lowercases() {
    assert_eq!(
        NewIdentity::normalize_email("  Asha@Example.COM "),
        "asha@example.com"
    );
}

#[test]
fn test_valid_identity_passes() {
    assert!(valid_identity().validate().is_ok());
}

#[test]
fn test_blank_name_rejected() {
    let mut identity = valid_identity();
    identity.full_name = "   ".to_string();

    assert!(matches!(
        identity.validate(),
        Err(CoreError::Validation { .. })
    ));
}

#[test]
fn test_oversized_address_field_rejected() {
    let mut identity = valid_identity();
    identity.address.village = Some("x".repeat(MAX_FIELD_LENGTH + 1));

    let result = identity.validate();

    let Err(CoreError::Validation { message, .. }) = result else {
        panic!("expected validation error, got {:?}", result);
    };
    assert!(message.contains("address.village"));
}

#[test]
fn test_address_field_at_limit_accepted() {
    let mut identity = valid_identity();
    identity.address.street_address = Some("x".repeat(MAX_FIELD_LENGTH));

    assert!(identity.validate().is_ok());
}

#[test]
fn test_missing_credentials_rejected() {
    let mut identity = valid_identity();
    identity.password_salt.clear();

    assert!(identity.validate().is_err());
}

#[test]
fn test_unrecognized_role_rejected() {
    let mut identity = valid_identity();
    identity.role = Role::Unrecognized;

    assert!(matches!(
        identity.validate(),
        Err(CoreError::InvalidRole { .. })
    ));
}
