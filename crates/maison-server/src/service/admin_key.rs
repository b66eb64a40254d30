//! Admin bearer-key verification.
//!
//! Admin routes are guarded by one static bearer key configured at
//! startup. Presented keys are compared through their SHA-256 digests so
//! the comparison does not leak the key length or early-mismatch timing.

use sha2::{Digest, Sha256};

/// Verifier for the configured admin bearer key.
#[derive(Clone)]
pub struct AdminKey {
    digest: [u8; 32],
}

impl AdminKey {
    /// Creates a verifier for the given key.
    pub fn new(key: &str) -> Self {
        Self {
            digest: Sha256::digest(key.as_bytes()).into(),
        }
    }

    /// Returns whether the presented key matches the configured one.
    pub fn verify(&self, presented: &str) -> bool {
        let presented: [u8; 32] = Sha256::digest(presented.as_bytes()).into();
        presented == self.digest
    }
}

impl std::fmt::Debug for AdminKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminKey").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_configured_key() {
        let key = AdminKey::new("workshop-key");
        assert!(key.verify("workshop-key"));
    }

    #[test]
    fn rejects_other_keys() {
        let key = AdminKey::new("workshop-key");
        assert!(!key.verify("workshop-key "));
        assert!(!key.verify(""));
        assert!(!key.verify("WORKSHOP-KEY"));
    }

    #[test]
    fn debug_does_not_leak_the_key() {
        let key = AdminKey::new("workshop-key");
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("workshop"));
    }
}
