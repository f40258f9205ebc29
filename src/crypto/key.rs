//! Key derivation for AES-128 encryption
//!
//! The portal derives the multipass key from the account credentials:
//! 1. Concatenate `shared_secret + account_id` (secret first)
//! 2. SHA-1 the UTF-8 bytes (20-byte digest)
//! 3. Keep the first 16 bytes

use sha1::{Digest, Sha1};

/// Key length for AES-128 (16 bytes = 128 bits)
pub const KEY_LENGTH: usize = 16;

/// Derive the 16-byte multipass key from the account credentials
///
/// # Arguments
///
/// * `account_id` - The portal account identifier (site/subdomain key)
/// * `shared_secret` - The API key shared with the portal
pub fn derive_key(account_id: &str, shared_secret: &str) -> [u8; KEY_LENGTH] {
    let mut hasher = Sha1::new();
    hasher.update(shared_secret.as_bytes());
    hasher.update(account_id.as_bytes());
    let digest = hasher.finalize();

    let mut key = [0u8; KEY_LENGTH];
    key.copy_from_slice(&digest[..KEY_LENGTH]);
    key
}
