//! Multipass signature
//!
//! Portals that require a signed multipass expect HMAC-SHA1 over the
//! base64 token (before URL escaping), keyed with the shared secret.

use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// HMAC-SHA1 digest length
pub const SIGNATURE_LENGTH: usize = 20;

/// Sign a base64 multipass token with the shared secret
pub fn sign(token_base64: &str, shared_secret: &str) -> Result<[u8; SIGNATURE_LENGTH], String> {
    let mut mac = HmacSha1::new_from_slice(shared_secret.as_bytes())
        .map_err(|e| format!("Invalid signing key: {}", e))?;
    mac.update(token_base64.as_bytes());

    let mut signature = [0u8; SIGNATURE_LENGTH];
    signature.copy_from_slice(&mac.finalize().into_bytes());
    Ok(signature)
}
