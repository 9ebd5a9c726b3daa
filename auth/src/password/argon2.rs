use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// One-way salted password hashing (Argon2id).
///
/// Digests are PHC strings carrying algorithm, parameters and salt, so
/// verification never needs anything besides the stored digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password.
    ///
    /// A fresh random salt is drawn for every call, so hashing the same
    /// password twice yields two different digests.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format digest
    ///
    /// # Errors
    /// * `HashingFailed` - Argon2 rejected the input or parameters
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Check a plaintext password against a stored digest.
    ///
    /// A malformed digest is reported exactly like a wrong password.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored digest in PHC string format
    ///
    /// # Returns
    /// True only if the digest parses and matches the password
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify(password, &hash));
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn test_hash_does_not_contain_plaintext() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("plaintext-secret").expect("Failed to hash password");

        assert!(!hash.contains("plaintext-secret"));
    }

    #[test]
    fn test_same_password_yields_different_digests() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("secret").expect("Failed to hash password");
        let second = hasher.hash("secret").expect("Failed to hash password");

        assert_ne!(first, second);
        assert!(hasher.verify("secret", &first));
        assert!(hasher.verify("secret", &second));
    }

    #[test]
    fn test_distinct_passwords_do_not_cross_verify() {
        let hasher = PasswordHasher::new();
        let passwords = ["secret", "Secret", "secret ", "", "s3cr3t", "pässwörd"];

        for p in passwords {
            let digest = hasher.hash(p).expect("Failed to hash password");
            for q in passwords.iter().filter(|q| **q != p) {
                assert!(!hasher.verify(q, &digest), "{q:?} verified against hash of {p:?}");
            }
        }
    }

    #[test]
    fn test_verify_malformed_hash_is_no_match() {
        let hasher = PasswordHasher::new();

        assert!(!hasher.verify("password", "invalid_hash"));
        assert!(!hasher.verify("password", ""));
        assert!(!hasher.verify("password", "$argon2id$v=19$m=19456,t=2,p=1$garbage"));
    }
}
