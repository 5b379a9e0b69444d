//! Credential format rules
//!
//! Pure predicates applied before any user record is created. The password
//! rule is length-only by product decision; do not strengthen it here
//! without one.

/// Check login format: 3-20 characters, ASCII alphanumeric at both ends,
/// alphanumeric / `_` / `-` in between
pub fn is_login_valid(login: &str) -> bool {
    let bytes = login.as_bytes();
    if bytes.len() < 3 || bytes.len() > 20 {
        return false;
    }

    let first = bytes[0];
    let last = bytes[bytes.len() - 1];
    if !first.is_ascii_alphanumeric() || !last.is_ascii_alphanumeric() {
        return false;
    }

    bytes[1..bytes.len() - 1]
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || *b == b'_' || *b == b'-')
}

/// Check password strength: at least 8 bytes
pub fn is_password_valid(password: &str) -> bool {
    password.len() >= 8
}
