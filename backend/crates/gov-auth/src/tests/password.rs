use crate::{AuthError, DIGEST_LENGTH, PasswordHasher, SALT_LENGTH};

use std::collections::HashSet;

use googletest::prelude::*;

fn fast_hasher() -> PasswordHasher {
    PasswordHasher::new(1_000).unwrap()
}

#[test]
fn given_same_plaintext_and_salt_when_hashed_twice_then_digests_match() {
    let hasher = fast_hasher();
    let salt = PasswordHasher::generate_salt().unwrap();

    let first = hasher.hash("secret1", &salt).unwrap();
    let second = hasher.hash("secret1", &salt).unwrap();

    assert_that!(first, eq(&second));
    assert_that!(first.len(), eq(DIGEST_LENGTH));
}

#[test]
fn given_different_plaintexts_when_hashed_with_same_salt_then_digests_differ() {
    let hasher = fast_hasher();
    let salt = PasswordHasher::generate_salt().unwrap();

    let first = hasher.hash("secret1", &salt).unwrap();
    let second = hasher.hash("secret2", &salt).unwrap();

    assert_that!(first, not(eq(&second)));
}

#[test]
fn given_same_plaintext_when_hashed_with_different_salts_then_digests_differ() {
    let hasher = fast_hasher();
    let salt_a = PasswordHasher::generate_salt().unwrap();
    let salt_b = PasswordHasher::generate_salt().unwrap();

    let first = hasher.hash("secret1", &salt_a).unwrap();
    let second = hasher.hash("secret1", &salt_b).unwrap();

    assert_that!(first, not(eq(&second)));
}

#[test]
fn given_many_generated_salts_then_all_unique_and_correct_length() {
    let salts: Vec<Vec<u8>> = (0..256)
        .map(|_| PasswordHasher::generate_salt().unwrap())
        .collect();

    let unique: HashSet<&Vec<u8>> = salts.iter().collect();

    assert_that!(unique.len(), eq(salts.len()));
    assert!(salts.iter().all(|s| s.len() == SALT_LENGTH));
}

#[test]
fn given_derived_credential_when_verified_with_correct_password_then_true() {
    let hasher = fast_hasher();
    let credential = hasher.derive("secret1").unwrap();

    let result = hasher
        .verify("secret1", &credential.salt, &credential.digest)
        .unwrap();

    assert_that!(result, eq(true));
}

#[test]
fn given_derived_credential_when_verified_with_wrong_password_then_false() {
    let hasher = fast_hasher();
    let credential = hasher.derive("secret1").unwrap();

    let result = hasher
        .verify("wrongpass", &credential.salt, &credential.digest)
        .unwrap();

    assert_that!(result, eq(false));
}

#[test]
fn given_different_iteration_counts_when_verified_then_false() {
    let credential = fast_hasher().derive("secret1").unwrap();
    let other = PasswordHasher::new(2_000).unwrap();

    let result = other
        .verify("secret1", &credential.salt, &credential.digest)
        .unwrap();

    assert_that!(result, eq(false));
}

#[test]
fn given_truncated_digest_when_verified_then_false() {
    let hasher = fast_hasher();
    let credential = hasher.derive("secret1").unwrap();

    let result = hasher
        .verify("secret1", &credential.salt, &credential.digest[..16])
        .unwrap();

    assert_that!(result, eq(false));
}

#[test]
fn given_empty_plaintext_when_hashed_then_invalid_input() {
    let hasher = fast_hasher();
    let salt = PasswordHasher::generate_salt().unwrap();

    let result = hasher.hash("", &salt);

    assert!(matches!(result, Err(AuthError::InvalidInput { .. })));
}

#[test]
fn given_wrong_salt_length_when_hashed_then_invalid_input() {
    let hasher = fast_hasher();

    let result = hasher.hash("secret1", &[0u8; 8]);

    assert!(matches!(result, Err(AuthError::InvalidInput { .. })));
}

#[test]
fn given_wrong_salt_length_when_verified_then_invalid_input() {
    let hasher = fast_hasher();

    let result = hasher.verify("secret1", &[], &[0u8; DIGEST_LENGTH]);

    assert!(matches!(result, Err(AuthError::InvalidInput { .. })));
}

#[test]
fn given_zero_iterations_when_created_then_configuration_error() {
    let result = PasswordHasher::new(0);

    assert!(matches!(result, Err(AuthError::Configuration { .. })));
}

#[test]
fn given_stored_credential_when_debug_printed_then_bytes_hidden() {
    let credential = fast_hasher().derive("secret1").unwrap();

    let printed = format!("{:?}", credential);

    assert_that!(printed, contains_substring("salt_len"));
    assert_that!(printed, not(contains_substring("digest: [")));
}
