//! Serializable failure reports for crash reporting.

use serde::{Deserialize, Serialize};

/// A flattened, serializable view of a [`KnownError`](super::KnownError).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanicReport {
    /// Code of the failure identity.
    pub code: String,
    /// Namespace of the failure identity.
    pub namespace: String,
    /// Message of the failure identity.
    pub message: String,
    /// Context attached when the failure was raised.
    pub context: String,
    /// Display text of every underlying cause, outermost first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
}

impl PanicReport {
    /// Serializes the report as a single-line JSON object.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses a report previously produced by [`PanicReport::to_json`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
