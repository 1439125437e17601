use serde_json::{Map, Value};

use super::DomainError;

/// Arbitrary JSON object submitted with a form.
///
/// Keys keep their insertion order. Two payloads are equal when their
/// compact JSON serializations are equal.
#[derive(Debug, Clone, Default)]
pub struct FormData(Map<String, Value>);

impl FormData {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Build from an untrusted JSON value. Only objects are accepted.
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Err(DomainError::MissingFormData),
            _ => Err(DomainError::FormDataNotObject),
        }
    }

    pub fn from_json_string(json: &str) -> Result<Self, DomainError> {
        if json.trim().is_empty() {
            return Err(DomainError::EmptyJson);
        }
        match serde_json::from_str::<Value>(json) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            _ => Err(DomainError::InvalidJson),
        }
    }

    pub fn to_json_string(&self) -> String {
        // Serializing a map of `Value`s cannot fail.
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.values()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for FormData {
    fn eq(&self, other: &Self) -> bool {
        self.to_json_string() == other.to_json_string()
    }
}

impl Eq for FormData {}

impl From<Map<String, Value>> for FormData {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
