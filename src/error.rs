//! Error types for multipass token generation

use thiserror::Error;

/// Problems with the credentials or configuration a generator is built from
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Account identifier (portal subdomain) is missing or empty
    #[error("Account id is missing")]
    MissingAccountId,

    /// Shared secret (API key) is missing or empty
    #[error("Shared secret is missing")]
    MissingSharedSecret,

    /// Configuration could not be parsed or holds an invalid value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Problems with the user attributes supplied to a token call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Attributes were not a JSON object; carries the actual JSON type
    #[error("User attributes must be a mapping, got {0}")]
    NotAMapping(String),

    /// The `guid` attribute is absent
    #[error("User attributes must contain a guid")]
    MissingGuid,

    /// The `guid` attribute is not a string; carries the actual JSON type
    #[error("guid must be a string, got {0}")]
    InvalidGuid(String),

    /// The `guid` attribute is an empty string
    #[error("guid must not be empty")]
    EmptyGuid,
}

/// Main error type for multipass operations
#[derive(Error, Debug)]
pub enum MultipassError {
    /// Generator could not be constructed
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Supplied attributes were rejected
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Attributes could not be serialized to JSON
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Encryption or signing failed
    #[error("Encryption error: {0}")]
    Encryption(String),
}

impl From<serde_json::Error> for MultipassError {
    fn from(err: serde_json::Error) -> Self {
        MultipassError::Serialization(err.to_string())
    }
}

/// Result type alias for multipass operations
pub type Result<T> = std::result::Result<T, MultipassError>;
