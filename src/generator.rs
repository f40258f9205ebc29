//! Multipass token generator
//!
//! This module provides the primary interface: a [`TokenGenerator`] bound to
//! one portal account, holding default attributes and producing tokens.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::attributes::{self, Attributes, EXPIRES_FIELD};
use crate::config::MultipassConfig;
use crate::crypto;
use crate::error::{ConfigurationError, MultipassError, Result};
use crate::utils::{encode_base64, url_escape};

/// Timestamp format the portal expects in `expires`
pub const EXPIRES_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A multipass token together with its signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedToken {
    /// Percent-encoded multipass token
    pub multipass: String,
    /// Percent-encoded base64 HMAC-SHA1 of the token
    pub signature: String,
}

/// Token generator for one portal account
pub struct TokenGenerator {
    account_id: String,
    shared_secret: String,
    defaults: Attributes,
    expires_in: Option<Duration>,
}

impl TokenGenerator {
    /// Create a generator from the account id and shared secret
    ///
    /// Both must be non-empty.
    pub fn new(account_id: &str, shared_secret: &str) -> Result<Self> {
        if account_id.trim().is_empty() {
            return Err(ConfigurationError::MissingAccountId.into());
        }
        if shared_secret.trim().is_empty() {
            return Err(ConfigurationError::MissingSharedSecret.into());
        }

        debug!(account_id, "Created multipass generator");

        Ok(Self {
            account_id: account_id.to_string(),
            shared_secret: shared_secret.to_string(),
            defaults: Attributes::new(),
            expires_in: None,
        })
    }

    /// Create a generator and apply the configured defaults and expiry
    pub fn from_config(config: &MultipassConfig) -> Result<Self> {
        config.validate()?;

        let mut generator = Self::new(&config.account_id, &config.shared_secret)?;
        generator.merge_defaults(config.defaults.clone());

        if let Some(secs) = config.expires_in_secs {
            let lifetime = Duration::try_seconds(secs).ok_or_else(|| {
                ConfigurationError::Invalid(format!("expires_in_secs out of range: {}", secs))
            })?;
            generator.set_expires_in(Some(lifetime))?;
        }

        Ok(generator)
    }

    /// Account identifier this generator signs for
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Current default attributes
    pub fn defaults(&self) -> &Attributes {
        &self.defaults
    }

    /// Set one default attribute, replacing any earlier value
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.defaults.insert(key.into(), value.into());
    }

    /// Merge a mapping into the defaults; its entries replace existing keys
    pub fn merge_defaults(&mut self, defaults: Attributes) {
        for (key, value) in defaults {
            self.defaults.insert(key, value);
        }
    }

    /// Token lifetime used to fill in `expires`
    pub fn expires_in(&self) -> Option<Duration> {
        self.expires_in
    }

    /// Set or clear the lifetime used to fill in `expires`
    ///
    /// Only applies when neither the defaults nor the supplied attributes
    /// carry an `expires` value. The lifetime must be positive.
    pub fn set_expires_in(&mut self, lifetime: Option<Duration>) -> Result<()> {
        if let Some(lifetime) = lifetime {
            if lifetime <= Duration::zero() {
                return Err(ConfigurationError::Invalid(format!(
                    "token lifetime must be positive, got {}s",
                    lifetime.num_seconds()
                ))
                .into());
            }
        }
        self.expires_in = lifetime;
        Ok(())
    }

    /// Create a multipass token for the given user attributes
    ///
    /// `attributes` must be a JSON object with a non-empty string `guid`.
    pub fn create_token(&self, attributes: &Value) -> Result<String> {
        self.create_token_at(attributes, Utc::now())
    }

    /// Create a token for any serializable attribute struct
    pub fn create_token_for<T: Serialize>(&self, attributes: &T) -> Result<String> {
        let value = serde_json::to_value(attributes)?;
        self.create_token(&value)
    }

    /// Create a token, computing `expires` relative to `now`
    pub fn create_token_at(&self, attributes: &Value, now: DateTime<Utc>) -> Result<String> {
        let encoded = self.encrypt_attributes(attributes, now)?;
        Ok(url_escape(&encoded))
    }

    /// Create a token together with its HMAC-SHA1 signature
    pub fn create_signed_token(&self, attributes: &Value) -> Result<SignedToken> {
        self.create_signed_token_at(attributes, Utc::now())
    }

    /// Signed variant of [`TokenGenerator::create_token_at`]
    pub fn create_signed_token_at(
        &self,
        attributes: &Value,
        now: DateTime<Utc>,
    ) -> Result<SignedToken> {
        let encoded = self.encrypt_attributes(attributes, now)?;
        let signature = crypto::sign(&encoded, &self.shared_secret)
            .map_err(MultipassError::Encryption)?;

        Ok(SignedToken {
            multipass: url_escape(&encoded),
            signature: url_escape(&encode_base64(&signature)),
        })
    }

    /// Validate, merge, serialize and encrypt; returns unescaped base64
    fn encrypt_attributes(&self, attributes: &Value, now: DateTime<Utc>) -> Result<String> {
        let supplied = attributes::validate(attributes).inspect_err(|e| {
            warn!(account_id = %self.account_id, error = %e, "Rejected multipass attributes");
        })?;

        let mut merged = attributes::merge(&self.defaults, supplied);
        if let Some(lifetime) = self.expires_in {
            if !merged.contains_key(EXPIRES_FIELD) {
                let expires = now.checked_add_signed(lifetime).ok_or_else(|| {
                    MultipassError::Serialization("expires timestamp out of range".to_string())
                })?;
                merged.insert(
                    EXPIRES_FIELD.to_string(),
                    Value::String(expires.format(EXPIRES_FORMAT).to_string()),
                );
            }
        }

        let payload = attributes::to_payload(&merged)?;
        let payload_len = payload.len();

        let ciphertext = crypto::seal(payload, &self.account_id, &self.shared_secret)
            .map_err(MultipassError::Encryption)?;

        debug!(
            account_id = %self.account_id,
            attributes = merged.len(),
            payload_len,
            "Created multipass token"
        );

        Ok(encode_base64(&ciphertext))
    }
}

impl fmt::Debug for TokenGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenGenerator")
            .field("account_id", &self.account_id)
            .field("shared_secret", &"<redacted>")
            .field("defaults", &self.defaults)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
