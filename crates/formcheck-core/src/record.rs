//! Form records: the caller-owned mapping of field names to raw values
//!
//! Copyright (c) 2025 Formcheck Team
//! Licensed under the Apache-2.0 license

use crate::field::Field;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Placeholder written in place of sensitive values
pub const REDACTED: &str = "***";

/// The current values of a form, keyed by field name.
///
/// A missing field reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    values: BTreeMap<String, String>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a value, returning the previous one
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    /// Get the raw value for a name, or `""` if absent
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Get the raw value for a validated field, or `""` if absent
    pub fn value(&self, field: Field) -> &str {
        self.get(field.name())
    }

    /// Whether the record holds an entry for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterate over the names present in the record
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterate over (name, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build a record from a decoded JSON object.
    ///
    /// Only string members are form values; anything else (the
    /// `showPassword` toggle of a serialized form state, numbers, nulls) is
    /// skipped.
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let mut record = Self::new();
        for (name, value) in object {
            match value {
                Value::String(s) => {
                    record.insert(name.clone(), s.clone());
                }
                other => {
                    debug!(field = %name, kind = json_kind(other), "Skipping non-string member");
                }
            }
        }
        record
    }

    /// JSON view of the record with sensitive values masked
    pub fn redacted(&self) -> Value {
        let map = self
            .values
            .iter()
            .map(|(name, value)| {
                let sensitive = Field::from_name(name).is_some_and(Field::is_sensitive);
                let shown = if sensitive { REDACTED } else { value.as_str() };
                (name.clone(), Value::String(shown.to_string()))
            })
            .collect();
        Value::Object(map)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_field_reads_empty() {
        let record = Record::new().with("firstName", "Jane");
        assert_eq!(record.value(Field::FirstName), "Jane");
        assert_eq!(record.value(Field::LastName), "");
        assert!(!record.contains("lastName"));
    }

    #[test]
    fn test_from_json_object_skips_non_strings() {
        let value = json!({
            "firstName": "Jane",
            "showPassword": true,
            "countryCode": 91,
            "city": null
        });
        let record = Record::from_json_object(value.as_object().unwrap());
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("firstName"), "Jane");
        assert!(!record.contains("showPassword"));
    }

    #[test]
    fn test_redacted_masks_password_only() {
        let record = Record::new()
            .with("username", "jdoe1")
            .with("password", "secret12");
        let redacted = record.redacted();
        assert_eq!(redacted["username"], "jdoe1");
        assert_eq!(redacted["password"], REDACTED);
        assert_eq!(record.get("password"), "secret12");
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let record: Record = [("email", "jane@example.com")].into_iter().collect();
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"email": "jane@example.com"})
        );
    }
}
