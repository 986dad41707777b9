//! Password hashing and verification utilities.
//!
//! Account digests are the lowercase hex SHA-512 of `(<salt>:<password>)`.
//! The same function backs AUTH verification and the MKPASSWD command.

use sha2::{Digest, Sha512};
use subtle::ConstantTimeEq;

/// Hash `password` with `salt` into the stored digest format.
pub fn hash_password(salt: &str, password: &str) -> String {
    let input = format!("({}:{})", salt, password);
    Sha512::digest(input.as_bytes())
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Verify a password against a stored digest.
///
/// The stored digest is compared case-insensitively and in constant time.
pub fn verify_password(salt: &str, password: &str, stored: &str) -> bool {
    let computed = hash_password(salt, password);
    let stored = stored.to_ascii_lowercase();
    computed.as_bytes().ct_eq(stored.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEPPER_HUNTER2: &str = "384d0a97fa5e4ad46b5e41cc1bc69689a38e6d1f52c7b826597b65c4c3f5683d73fe96d40bcc91935333a30fcf2fe239a7e763ee26cc5965cf75a5117d887df7";

    #[test]
    fn test_hash_format() {
        let digest = hash_password("changeme", "changeme");
        assert_eq!(digest.len(), 128);
        assert!(digest.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
    }

    #[test]
    fn test_hash_is_salted() {
        assert_ne!(hash_password("a", "secret"), hash_password("b", "secret"));
        assert_eq!(hash_password("a", "secret"), hash_password("a", "secret"));
    }

    #[test]
    fn test_verify_roundtrip() {
        let stored = hash_password("pepper", "hunter2");
        assert!(verify_password("pepper", "hunter2", &stored));
        assert!(verify_password("pepper", "hunter2", &stored.to_uppercase()));
        assert!(!verify_password("pepper", "hunter3", &stored));
        assert!(!verify_password("salt", "hunter2", &stored));
        assert!(!verify_password("pepper", "hunter2", "short"));
    }

    #[test]
    fn test_known_digest() {
        assert_eq!(hash_password("pepper", "hunter2"), PEPPER_HUNTER2);
    }
}
