use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "Admin");
    assert_eq!(Role::Resident.as_str(), "Resident");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("Admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("Resident").unwrap(), Role::Resident);
    assert!(Role::from_str("admin").is_err());
    assert!(Role::from_str("").is_err());
}

#[test]
fn test_role_from_claim_maps_unknown_values() {
    assert_eq!(Role::from_claim("Admin"), Role::Admin);
    assert_eq!(Role::from_claim("Superuser"), Role::Unrecognized);
    assert_eq!(Role::from_claim("ADMIN"), Role::Unrecognized);
    assert!(!Role::from_claim("Superuser").is_admin());
}

#[test]
fn test_role_default() {
    assert_eq!(Role::default(), Role::Resident);
}
