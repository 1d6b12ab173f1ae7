//! Password Hashing
//!
//! Salted blake3 digests for driver credentials, stored as
//! `"{salt}${digest_hex}"`.

use uuid::Uuid;

/// Hash a password under a fresh random salt.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    format!("{salt}${}", digest(&salt, password).to_hex())
}

/// Verify a password against a stored hash.
///
/// Malformed stored values never match. The digest comparison goes through
/// `blake3::Hash` equality, which is constant-time.
#[must_use]
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt, expected)) = stored.split_once('$') else {
        return false;
    };
    match blake3::Hash::from_hex(expected) {
        Ok(expected) => digest(salt, password) == expected,
        Err(_) => false,
    }
}

fn digest(salt: &str, password: &str) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hasher.finalize()
}
