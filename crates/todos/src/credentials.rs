//! Argon2 password verification.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::RngCore;
use thiserror::Error;

use todos_core::auth::CredentialVerifier;

/// Errors that can occur while hashing a password.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("failed to hash password: {0}")]
    Hash(String),
}

/// Argon2id verifier for PHC-formatted password hashes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Verifier;

impl Argon2Verifier {
    pub fn new() -> Self {
        Self
    }

    /// Hashes a password with a fresh random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, CredentialError> {
        let mut salt_bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut salt_bytes);

        let salt =
            SaltString::encode_b64(&salt_bytes).map_err(|e| CredentialError::Hash(e.to_string()))?;

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| CredentialError::Hash(e.to_string()))
    }
}

impl CredentialVerifier for Argon2Verifier {
    fn verify(&self, password: &str, stored_hash: &str) -> bool {
        let parsed = match PasswordHash::new(stored_hash) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(error = %err, "Stored password hash is malformed");
                return false;
            }
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let verifier = Argon2Verifier::new();
        let hash = verifier.hash_password("secret").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verifier.verify("secret", &hash));
        assert!(!verifier.verify("wrong", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let verifier = Argon2Verifier::new();
        let first = verifier.hash_password("secret").unwrap();
        let second = verifier.hash_password("secret").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_never_matches() {
        assert!(!Argon2Verifier::new().verify("secret", "not-a-phc-string"));
    }
}
