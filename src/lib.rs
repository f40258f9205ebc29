//! # multipass-token
//!
//! Single-sign-on ("multipass") token generation for hosted support portals.
//!
//! ## Features
//!
//! - AES-128-CBC encryption with the portal's fixed IV and manual padding
//! - Key derived from SHA-1 of the shared secret and account id
//! - Default attributes merged into every token
//! - Optional `expires` attribute and HMAC-SHA1 signature
//!
//! ## Example
//!
//! ```
//! use multipass_token::TokenGenerator;
//! use serde_json::json;
//!
//! let mut generator = TokenGenerator::new("acme", "secret123").unwrap();
//! generator.set_default("customer_custom_plan", "gold");
//!
//! let token = generator
//!     .create_token(&json!({"guid": "user-1", "email": "jane@example.com"}))
//!     .unwrap();
//! assert!(!token.is_empty());
//! ```
//!
//! ## Byte representation
//!
//! Attributes are serialized once to UTF-8 JSON; the IV XOR, the padding
//! and the encryption all work on that byte buffer, so padding is always
//! computed on byte length. The fixed IV is reused for every token because
//! the portal decrypts with it.

pub mod attributes;
pub mod config;
pub mod crypto;
pub mod error;
pub mod generator;
pub mod utils;

// Re-export main types
pub use attributes::{Attributes, EXPIRES_FIELD, GUID_FIELD};
pub use config::MultipassConfig;
pub use error::{ConfigurationError, MultipassError, Result, ValidationError};
pub use generator::{SignedToken, TokenGenerator, EXPIRES_FORMAT};
