//! Cryptographic operations for multipass tokens
//!
//! This module implements AES-128-CBC encryption with manual padding and a
//! fixed IV, exactly matching what the support portal decrypts.

mod aes;
mod key;
mod padding;
mod signature;

pub use self::aes::{encrypt, xor_iv, BLOCK_SIZE, IV};
pub use key::{derive_key, KEY_LENGTH};
pub use padding::{pad, pad_length};
pub use signature::{sign, SIGNATURE_LENGTH};

/// Run the full byte pipeline on a serialized payload: XOR with the IV,
/// pad, and encrypt under the key derived from the credentials.
pub fn seal(
    mut payload: Vec<u8>,
    account_id: &str,
    shared_secret: &str,
) -> Result<Vec<u8>, String> {
    xor_iv(&mut payload);
    let key = derive_key(account_id, shared_secret);
    pad(&mut payload);
    encrypt(&payload, &key)
}
