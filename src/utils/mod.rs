//! Utility functions

mod encoding;

pub use encoding::{encode_base64, url_escape, URI_COMPONENT};
