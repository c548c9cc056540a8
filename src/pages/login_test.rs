use super::*;

#[test]
fn validate_credentials_trims_both_fields() {
    let creds = validate_credentials("  alice  ", "  hunter22  ").unwrap();
    assert_eq!(creds.username, "alice");
    assert_eq!(creds.password, "hunter22");
}

#[test]
fn validate_credentials_rejects_short_username() {
    assert_eq!(
        validate_credentials("al", "longenough"),
        Err("Username must be at least 3 characters.")
    );
    assert_eq!(
        validate_credentials("  ab  ", "longenough"),
        Err("Username must be at least 3 characters.")
    );
}

#[test]
fn validate_credentials_rejects_short_password() {
    assert_eq!(
        validate_credentials("alice", "seven77"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn validate_credentials_accepts_boundary_lengths() {
    assert!(validate_credentials("abc", "12345678").is_ok());
}
