//! User attribute handling
//!
//! Attributes are a JSON object of name to value. A token call merges the
//! generator defaults with the supplied attributes and serializes the result
//! as compact JSON with object keys in sorted order. `serde_json` is used
//! without `preserve_order`, so `Map` iterates in key order and the payload
//! does not depend on insertion order.

use serde_json::Value;

use crate::error::ValidationError;

/// Attribute mapping, also used for generator defaults
pub type Attributes = serde_json::Map<String, Value>;

/// Required unique user identifier
pub const GUID_FIELD: &str = "guid";

/// Optional expiry timestamp understood by the portal
pub const EXPIRES_FIELD: &str = "expires";

/// JSON type name used in validation messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Check that `value` is an object with a non-empty string `guid`
///
/// Returns the object on success.
pub fn validate(value: &Value) -> Result<&Attributes, ValidationError> {
    let Value::Object(attributes) = value else {
        return Err(ValidationError::NotAMapping(json_type_name(value).to_string()));
    };

    match attributes.get(GUID_FIELD) {
        None => Err(ValidationError::MissingGuid),
        Some(Value::String(guid)) if guid.is_empty() => Err(ValidationError::EmptyGuid),
        Some(Value::String(_)) => Ok(attributes),
        Some(other) => Err(ValidationError::InvalidGuid(json_type_name(other).to_string())),
    }
}

/// Shallow merge: start from `defaults`, `supplied` wins on collision
pub fn merge(defaults: &Attributes, supplied: &Attributes) -> Attributes {
    let mut merged = defaults.clone();
    for (key, value) in supplied {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Serialize attributes to the compact UTF-8 JSON payload
pub fn to_payload(attributes: &Attributes) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(attributes)
}
