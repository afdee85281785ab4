use crate::api::auth::auth::is_valid_email;

#[test]
fn test_accepts_ordinary_addresses() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("asha.devi+portal@district.gov.in"));
}

#[test]
fn test_rejects_malformed_addresses() {
    for email in [
        "",
        "plainaddress",
        "@b.com",
        "a@",
        "a@b",
        "a@@b.com",
        "a@b@c.com",
        "a b@c.com",
        "a@.com",
        "a@b.com.",
        "a@b..com",
    ] {
        assert!(!is_valid_email(email), "expected '{}' to be rejected", email);
    }
}
