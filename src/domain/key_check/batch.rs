//! Candidate key batch submitted by a caller

use serde_json::Value;

use crate::domain::DomainError;

/// Message returned when the submitted batch is absent, not an array, or empty
pub const KEYS_REQUIRED_MESSAGE: &str = "API keys array is required.";

/// Ordered batch of candidate keys.
///
/// Entries that are not JSON strings are kept as `None` so their position
/// still produces a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBatch {
    entries: Vec<Option<String>>,
}

impl KeyBatch {
    /// Build a batch from string keys
    pub fn new(keys: Vec<String>) -> Result<Self, DomainError> {
        if keys.is_empty() {
            return Err(DomainError::validation(KEYS_REQUIRED_MESSAGE));
        }

        Ok(Self {
            entries: keys.into_iter().map(Some).collect(),
        })
    }

    /// Build a batch from the raw `keys` field of a request body
    pub fn from_json(keys: Option<&Value>) -> Result<Self, DomainError> {
        let entries: Vec<Option<String>> = match keys {
            Some(Value::Array(items)) if !items.is_empty() => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => return Err(DomainError::validation(KEYS_REQUIRED_MESSAGE)),
        };

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Option<String>] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Option<String>> {
        self.entries
    }
}
