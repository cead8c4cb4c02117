//! Emissions estimate entities

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the numeric field carried by emissions responses
pub const EMISSIONS_FIELD: &str = "emissions";

/// Emissions figure for one route, as reported by the emissions service
///
/// A response without a numeric `emissions` field is `Missing`, which ranks
/// as positive infinity and therefore never wins a selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EmissionsEstimate {
    /// A numeric figure was reported
    Reported(f64),
    /// The field was absent, null, or not a number
    Missing,
}

impl EmissionsEstimate {
    /// Interpret the raw `emissions` field of a response
    #[must_use]
    pub fn from_field(field: Option<&Value>) -> Self {
        field
            .and_then(Value::as_f64)
            .map_or(Self::Missing, Self::Reported)
    }

    /// Value used for ranking (`+inf` when missing)
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            Self::Reported(v) => *v,
            Self::Missing => f64::INFINITY,
        }
    }

    /// Whether a numeric figure was reported
    #[must_use]
    pub const fn is_reported(&self) -> bool {
        matches!(self, Self::Reported(_))
    }
}

impl fmt::Display for EmissionsEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reported(v) => write!(f, "{v}"),
            Self::Missing => write!(f, "missing"),
        }
    }
}

/// Parsed emissions response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsReport {
    /// The emissions figure
    pub estimate: EmissionsEstimate,
    /// Every other field of the response, kept verbatim
    #[serde(default)]
    pub extra: Map<String, Value>,
}

impl EmissionsReport {
    /// Build a report from a decoded JSON response body
    ///
    /// Non-object bodies yield a `Missing` estimate and no extra fields.
    #[must_use]
    pub fn from_json(body: Value) -> Self {
        match body {
            Value::Object(mut fields) => {
                let estimate = EmissionsEstimate::from_field(fields.get(EMISSIONS_FIELD));
                fields.remove(EMISSIONS_FIELD);
                Self {
                    estimate,
                    extra: fields,
                }
            },
            _ => Self::missing(),
        }
    }

    /// A report with a reported figure and no extra fields
    #[must_use]
    pub fn reported(value: f64) -> Self {
        Self {
            estimate: EmissionsEstimate::Reported(value),
            extra: Map::new(),
        }
    }

    /// A report without a figure
    #[must_use]
    pub fn missing() -> Self {
        Self {
            estimate: EmissionsEstimate::Missing,
            extra: Map::new(),
        }
    }
}
