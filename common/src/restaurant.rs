//! # Restaurant Record Model
//!
//! A restaurant is whatever JSON value the remote source sends for it. Only the
//! `name` field has meaning to the screen (filtering and the list title); every
//! other field is handed to the detail renderer untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One element of the remote restaurant array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantRecord(Value);

impl RestaurantRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The `name` field, or `""` when it is missing or not a string.
    pub fn name(&self) -> &str {
        self.0.get("name").and_then(Value::as_str).unwrap_or("")
    }

    /// Looks up any other field of the record.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Field/value pairs in source order, excluding `name`.
    ///
    /// Records that are not JSON objects yield nothing.
    pub fn details(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0
            .as_object()
            .into_iter()
            .flat_map(|map| map.iter())
            .filter(|(key, _)| key.as_str() != "name")
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }
}

/// Decodes a response body that must be a JSON array of records.
pub fn decode_array(body: &[u8]) -> serde_json::Result<Vec<RestaurantRecord>> {
    serde_json::from_slice(body)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
