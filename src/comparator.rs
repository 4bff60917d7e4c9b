//! Secret Comparator collaborator: checks a presented secure hash
//! against a stored secret and a per-request salt.

use sha2::{Digest, Sha256};

/// Compares a presented secure hash to a stored secret given a salt.
///
/// The hashing scheme is owned by the implementation; the verifier only
/// consumes the boolean outcome and never computes digests itself.
pub trait SecretComparator: Send + Sync {
    fn is_valid(&self, presented_hash: &str, stored_secret: &str, salt: &str) -> bool;
}

/// Default comparator: `hex(sha256(secret || salt))`.
///
/// A client presents the hex digest of its secret concatenated with the
/// per-request salt; the server recomputes the digest from the stored
/// secret and compares.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256SecretComparator;

impl Sha256SecretComparator {
    pub fn new() -> Self {
        Self
    }

    /// Compute the secure hash a client must present for a secret and salt
    pub fn digest(&self, secret: &str, salt: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(secret.as_bytes());
        hasher.update(salt.as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl SecretComparator for Sha256SecretComparator {
    fn is_valid(&self, presented_hash: &str, stored_secret: &str, salt: &str) -> bool {
        self.digest(stored_secret, salt) == presented_hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_known_answer() {
        // sha256 of the empty string
        let comparator = Sha256SecretComparator::new();
        assert_eq!(
            comparator.digest("", ""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_is_valid_matches_own_digest() {
        let comparator = Sha256SecretComparator::new();
        let hash = comparator.digest("stored-secret", "nonce");
        assert!(comparator.is_valid(&hash, "stored-secret", "nonce"));
    }

    #[test]
    fn test_is_valid_rejects_wrong_salt_or_secret() {
        let comparator = Sha256SecretComparator::new();
        let hash = comparator.digest("stored-secret", "nonce");
        assert!(!comparator.is_valid(&hash, "stored-secret", "other-nonce"));
        assert!(!comparator.is_valid(&hash, "other-secret", "nonce"));
    }
}
