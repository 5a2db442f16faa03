//! Account-level models.

use serde::{Deserialize, Serialize};

use super::primitives::null_as_default;

/// Where a workspace's data lives, as reported by the Track API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRegion {
    /// Track API base URL for the workspace
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Region code, e.g. `"us"` or `"eu"`
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    /// Workspace (environment) id
    #[serde(default)]
    pub environment_id: i64,
}

impl AccountRegion {
    /// The reported region as a [`Region`](super::Region), if recognised.
    pub fn as_region(&self) -> Option<super::Region> {
        match self.region.to_ascii_lowercase().as_str() {
            "us" => Some(super::Region::Us),
            "eu" => Some(super::Region::Eu),
            _ => None,
        }
    }
}
