//! Custom object models.

use serde::{Deserialize, Serialize};

use super::primitives::null_as_default;

/// Metadata describing a custom object *type*, not an individual object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomObjectType {
    /// Object type id
    pub id: String,
    /// Plural display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Whether the type is enabled in the workspace
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled: bool,
    /// Singular display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub singular_name: String,
    /// URL slug
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    /// Singular URL slug
    #[serde(default, deserialize_with = "null_as_default")]
    pub singular_slug: String,
}
