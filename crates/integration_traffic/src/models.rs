//! Raw traffic service response types

use serde::Deserialize;
use serde_json::Value;

/// Body of a traffic response: `{ "routes": [ ... ] }`
///
/// An absent or null `routes` field decodes as no routes.
#[derive(Debug, Deserialize)]
pub(crate) struct RawTrafficResponse {
    #[serde(default)]
    pub routes: Option<Vec<Value>>,
}
