//! Form input checks shared by the login and admin pages.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Minimum password length accepted at registration and login.
pub const MIN_PASSWORD_LEN: usize = 6;

/// `local@domain` with no whitespace anywhere.
#[must_use]
pub fn looks_like_email(raw: &str) -> bool {
    if raw.is_empty() || raw.chars().any(char::is_whitespace) {
        return false;
    }
    match raw.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}
