//! Request and response types for the key check endpoint

use serde::Deserialize;
use serde_json::Value;

/// `POST /check-keys` body
///
/// `keys` stays untyped so that a missing field, a non-array value and an
/// empty array all surface as the same validation error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckKeysRequest {
    #[serde(default)]
    pub keys: Option<Value>,
}
