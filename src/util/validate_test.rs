use super::*;

// =============================================================
// Email shape
// =============================================================

#[test]
fn accepts_plain_addresses() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("user.name+tag@sub.example.org"));
}

#[test]
fn rejects_missing_at_or_dot() {
    assert!(!is_valid_email("plainaddress"));
    assert!(!is_valid_email("a@nodot"));
    assert!(!is_valid_email(""));
}

#[test]
fn rejects_empty_parts() {
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email("a@b."));
}

#[test]
fn rejects_whitespace_and_double_at() {
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@b c.com"));
    assert!(!is_valid_email("a@b@c.com"));
}

// =============================================================
// Login input
// =============================================================

#[test]
fn login_input_trims_and_passes() {
    assert_eq!(
        validate_login_input("  a@b.com  ", "secret"),
        Ok(("a@b.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn login_input_requires_email() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Email is required."));
}

#[test]
fn login_input_requires_password() {
    assert_eq!(validate_login_input("a@b.com", ""), Err("Password is required."));
}

#[test]
fn login_input_rejects_bad_email() {
    assert_eq!(validate_login_input("not-an-email", "secret"), Err("Invalid email format."));
}

// =============================================================
// Registration input
// =============================================================

#[test]
fn register_input_builds_trimmed_request() {
    let request = validate_register_input(" Ada ", " Lovelace ", " ada@example.com ", "secret1");
    assert_eq!(
        request,
        Ok(RegisterRequest {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "secret1".to_owned(),
        })
    );
}

#[test]
fn register_input_requires_each_field() {
    assert_eq!(
        validate_register_input("", "L", "a@b.com", "secret1"),
        Err("First name is required.")
    );
    assert_eq!(
        validate_register_input("A", "  ", "a@b.com", "secret1"),
        Err("Last name is required.")
    );
    assert_eq!(
        validate_register_input("A", "L", "", "secret1"),
        Err("Email is required.")
    );
    assert_eq!(
        validate_register_input("A", "L", "a@b.com", ""),
        Err("Password is required.")
    );
}

#[test]
fn register_input_rejects_short_password_before_any_call() {
    // Five characters: below the minimum of six.
    assert_eq!(
        validate_register_input("A", "L", "a@b.com", "five5"),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn register_input_accepts_six_character_password() {
    assert!(validate_register_input("A", "L", "a@b.com", "sixsix").is_ok());
}
