//! Password hashing
//!
//! One-way Argon2 hashing with per-password salts. Verification never
//! errors; any mismatch, malformed hash, or empty plaintext reads as false.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a password with a fresh random salt
///
/// The result is a self-contained PHC string. Fails only when the entropy
/// source or hasher parameters fail, which is not user-recoverable.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Check a plaintext password against a stored hash
pub fn verify_password(password: &str, hash: &str) -> bool {
    if password.is_empty() {
        return false;
    }
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("securepass123").expect("Failed to hash password");
        assert!(!hash.is_empty());
        assert!(verify_password("securepass123", &hash));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hash = hash_password("securepass123").expect("Failed to hash password");
        assert!(!verify_password("wrongpass", &hash));
        assert!(!verify_password("securepass123x", &hash));
    }

    #[test]
    fn test_empty_password_rejected() {
        let hash = hash_password("securepass123").expect("Failed to hash password");
        assert!(!verify_password("", &hash));
    }

    #[test]
    fn test_malformed_hash_rejected() {
        assert!(!verify_password("securepass123", "invalid-hash"));
        assert!(!verify_password("securepass123", ""));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("securepass123").expect("Failed to hash password");
        let b = hash_password("securepass123").expect("Failed to hash password");
        assert_ne!(a, b);
        assert!(verify_password("securepass123", &a));
        assert!(verify_password("securepass123", &b));
    }
}
