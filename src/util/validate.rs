//! Client-side form validation for the login and registration flows.
//!
//! Every rule runs before any HTTP call; a failing rule produces the exact
//! message the form displays. The server re-validates everything — these
//! checks only keep obviously bad submissions off the wire.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::types::RegisterRequest;

/// Minimum accepted password length, matching the server rule.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Loose address-shape check: one `@` with a non-empty, whitespace-free
/// local part and a dotted domain. Deliverability is the server's problem.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(|c| c.is_whitespace() || c == '@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validate login form input, returning trimmed `(email, password)`.
///
/// # Errors
///
/// Returns the displayable message for the first failing rule.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required.");
    }
    if password.is_empty() {
        return Err("Password is required.");
    }
    if !is_valid_email(email) {
        return Err("Invalid email format.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Validate registration form input, returning the request body to send.
///
/// # Errors
///
/// Returns the displayable message for the first failing rule.
pub fn validate_register_input(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<RegisterRequest, &'static str> {
    let first_name = first_name.trim();
    let last_name = last_name.trim();
    let email = email.trim();
    if first_name.is_empty() {
        return Err("First name is required.");
    }
    if last_name.is_empty() {
        return Err("Last name is required.");
    }
    if email.is_empty() {
        return Err("Email is required.");
    }
    if password.is_empty() {
        return Err("Password is required.");
    }
    if !is_valid_email(email) {
        return Err("Invalid email format.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(RegisterRequest {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}
