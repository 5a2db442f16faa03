//! Segment model.

use serde::{Deserialize, Serialize};

use super::primitives::null_as_default;

/// A read-only projection of a segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Numeric segment id
    #[serde(default)]
    pub id: u64,
    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Free-form description
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Build state, e.g. `"finished"`
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    /// `"dynamic"` or `"manual"`
    #[serde(default, deserialize_with = "null_as_default", rename = "type")]
    pub segment_type: String,
}
