//! Generator configuration
//!
//! The library reads no files or environment variables itself. Callers that
//! keep portal settings in a JSON document can parse them into
//! [`MultipassConfig`] and hand it to `TokenGenerator::from_config`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::error::ConfigurationError;

/// Settings for one portal account
#[derive(Clone, Serialize, Deserialize)]
pub struct MultipassConfig {
    /// Portal account identifier (site key / subdomain)
    pub account_id: String,
    /// API key shared with the portal
    pub shared_secret: String,
    /// Attributes merged into every token
    #[serde(default)]
    pub defaults: Attributes,
    /// Lifetime added as `expires` when a token does not carry one
    #[serde(default)]
    pub expires_in_secs: Option<i64>,
}

impl MultipassConfig {
    /// Create a config with no defaults and no expiry
    pub fn new(account_id: &str, shared_secret: &str) -> Self {
        Self {
            account_id: account_id.to_string(),
            shared_secret: shared_secret.to_string(),
            defaults: Attributes::new(),
            expires_in_secs: None,
        }
    }

    /// Parse a JSON config document
    pub fn from_json_str(s: &str) -> Result<Self, ConfigurationError> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| ConfigurationError::Invalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check credentials and expiry
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.account_id.trim().is_empty() {
            return Err(ConfigurationError::MissingAccountId);
        }
        if self.shared_secret.trim().is_empty() {
            return Err(ConfigurationError::MissingSharedSecret);
        }
        if let Some(secs) = self.expires_in_secs {
            if secs <= 0 {
                return Err(ConfigurationError::Invalid(format!(
                    "expires_in_secs must be positive, got {}",
                    secs
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for MultipassConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultipassConfig")
            .field("account_id", &self.account_id)
            .field("shared_secret", &"<redacted>")
            .field("defaults", &self.defaults)
            .field("expires_in_secs", &self.expires_in_secs)
            .finish()
    }
}
