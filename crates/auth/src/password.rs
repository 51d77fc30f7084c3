//! Password hashing and verification using Argon2id.
//!
//! Hashes are PHC-formatted strings embedding the salt and parameters, so
//! verification needs no extra state. The work factor is Argon2's default,
//! which is deliberately expensive.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hash(String),

    #[error("stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(plaintext: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::Hash(e.to_string()))
}

/// Verify a plaintext password against a stored PHC hash.
///
/// A wrong password is `Ok(false)`, not an error; only an unparseable
/// stored hash is an error.
pub fn verify_password(plaintext: &str, stored: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(stored).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hash = hash_password("secret1").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("secret1", &hash).unwrap());
        assert!(!verify_password("secret2", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        let h1 = hash_password("secret1").unwrap();
        let h2 = hash_password("secret1").unwrap();

        // Fresh salt per hash.
        assert_ne!(h1, h2);
        assert!(verify_password("secret1", &h1).unwrap());
        assert!(verify_password("secret1", &h2).unwrap());
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        let err = verify_password("secret1", "not-a-phc-string").unwrap_err();
        assert!(matches!(err, PasswordError::MalformedHash(_)));
    }
}
