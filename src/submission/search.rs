use serde_json::Value;

/// Lower-cased needle for case-insensitive substring search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// `None` when there is nothing to filter on: absent, empty or whitespace-only.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let raw = raw?;
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self(raw.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches_text(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0)
    }

    /// Whether any value of the payload, at any depth, contains the term.
    /// Object keys are not searched.
    pub fn matches_values<'a>(&self, mut values: impl Iterator<Item = &'a Value>) -> bool {
        values.any(|v| self.matches_value(v))
    }

    pub fn matches_value(&self, value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::String(s) => self.matches_text(s),
            Value::Bool(b) => b.to_string().contains(&self.0),
            Value::Number(n) => n.to_string().contains(&self.0),
            Value::Array(items) => self.matches_values(items.iter()),
            Value::Object(map) => self.matches_values(map.values()),
        }
    }
}
