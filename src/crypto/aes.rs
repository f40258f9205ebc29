//! AES-128-CBC encryption for multipass payloads
//!
//! This module implements the exact scheme the portal decrypts:
//! - AES-128-CBC with cipher-level padding disabled (see `padding`)
//! - Fixed IV, the ASCII bytes of `"OpenSSL for Ruby"`
//! - The first block of plaintext is XORed with the same IV before encryption
//!
//! **IMPORTANT**: Reusing one fixed IV for every token leaks equality of
//! payload prefixes. It is part of the portal's wire contract and must not
//! be replaced with a random IV.

use aes::Aes128;
use cbc::Encryptor;
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockEncryptMut, KeyIvInit};

use super::key::KEY_LENGTH;

/// AES block size and IV size (16 bytes = 128 bits)
pub const BLOCK_SIZE: usize = 16;

/// Fixed IV expected by the portal
pub const IV: [u8; BLOCK_SIZE] = *b"OpenSSL for Ruby";

type Aes128CbcEnc = Encryptor<Aes128>;

/// XOR the leading bytes of `data` with the fixed IV, in place
///
/// Only `min(data.len(), 16)` bytes are touched; a payload shorter than one
/// block is XORed over its whole length and nothing is appended.
pub fn xor_iv(data: &mut [u8]) {
    for (byte, iv) in data.iter_mut().zip(IV.iter()) {
        *byte ^= iv;
    }
}

/// Encrypt an already padded buffer using AES-128-CBC
///
/// # Arguments
///
/// * `padded` - Plaintext whose length is a non-zero multiple of 16
/// * `key` - The 16-byte key from `derive_key`
///
/// # Returns
///
/// Ciphertext of the same length, or error message on failure
pub fn encrypt(padded: &[u8], key: &[u8; KEY_LENGTH]) -> Result<Vec<u8>, String> {
    if padded.is_empty() || padded.len() % BLOCK_SIZE != 0 {
        return Err(format!(
            "Plaintext length {} is not a multiple of {}",
            padded.len(),
            BLOCK_SIZE
        ));
    }

    let mut buffer = padded.to_vec();
    let msg_len = buffer.len();

    let encryptor = Aes128CbcEnc::new_from_slices(key, &IV)
        .map_err(|e| format!("Invalid key or IV: {:?}", e))?;

    let encrypted = encryptor
        .encrypt_padded_mut::<NoPadding>(&mut buffer, msg_len)
        .map_err(|e| format!("Encryption failed: {:?}", e))?;

    Ok(encrypted.to_vec())
}
