//! Token text encoding
//!
//! Ciphertext is rendered as standard base64 (with `=` padding and no line
//! breaks) and then percent-escaped so it can be dropped into a query string.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped, matching JavaScript's `encodeURIComponent`
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Standard base64 with padding
pub fn encode_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Percent-encode a string for use as a query parameter value
pub fn url_escape(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}
