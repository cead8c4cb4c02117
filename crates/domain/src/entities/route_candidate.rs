//! Route candidate entity

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keys probed, in order, when deriving a display label
const LABEL_KEYS: [&str; 3] = ["summary", "name", "id"];

/// One route option returned by the traffic service
///
/// The structure is opaque: whatever JSON the traffic service returns for a
/// route is kept verbatim and forwarded unmodified to the emissions service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteCandidate(Value);

impl RouteCandidate {
    /// Wrap a raw JSON value
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the raw JSON value
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume and return the raw JSON value
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Compact JSON form used as the `route` query parameter
    #[must_use]
    pub fn to_query_value(&self) -> String {
        match &self.0 {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Best-effort human label taken from a `summary`, `name` or `id` field
    #[must_use]
    pub fn label(&self) -> Option<String> {
        let object = self.0.as_object()?;
        LABEL_KEYS.iter().find_map(|key| match object.get(*key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    /// Pretty-printed JSON for display
    #[must_use]
    pub fn to_pretty_string(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

impl From<Value> for RouteCandidate {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for RouteCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{label}"),
            None => write!(f, "{}", self.0),
        }
    }
}
