//! Primitive types shared across endpoints.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::enums::IdentifierType;

/// Deserialize a field that the server may send as `null`, treating `null`
/// the same as an absent key. Pair with `#[serde(default)]`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// An open, schema-less attribute map.
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// A customer address: which field to match on and the value to match.
///
/// # Example
///
/// ```
/// use customerio::models::{Identifier, IdentifierType};
///
/// let id = Identifier::email("person@example.com");
/// assert_eq!(id.id_type, IdentifierType::Email);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// Which field the value refers to
    pub id_type: IdentifierType,
    /// The value to match
    pub value: String,
}

impl Identifier {
    /// Create an identifier of any type.
    pub fn new(id_type: IdentifierType, value: impl Into<String>) -> Self {
        Self {
            id_type,
            value: value.into(),
        }
    }

    /// A caller-assigned customer id.
    pub fn id(value: impl Into<String>) -> Self {
        Self::new(IdentifierType::Id, value)
    }

    /// An email address.
    pub fn email(value: impl Into<String>) -> Self {
        Self::new(IdentifierType::Email, value)
    }

    /// A platform-assigned `cio_id`.
    pub fn cio_id(value: impl Into<String>) -> Self {
        Self::new(IdentifierType::CioId, value)
    }

    /// Whether this identifier can address a customer in a merge: the type
    /// must be `id`, `email` or `cio_id` and the value must not be blank.
    pub fn is_valid_for_merge(&self) -> bool {
        self.id_type.is_customer_identifier() && !self.value.trim().is_empty()
    }

    /// The single-key JSON object `{"<type>": "<value>"}`.
    pub(crate) fn to_json(&self) -> serde_json::Value {
        let mut map = Attributes::new();
        map.insert(
            self.id_type.as_str().to_string(),
            serde_json::Value::String(self.value.clone()),
        );
        serde_json::Value::Object(map)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.id_type, self.value)
    }
}

/// Data-residency region of a Customer.io workspace.
///
/// Determines the default base URLs of both API families.
///
/// # Example
///
/// ```
/// use customerio::Region;
///
/// assert_eq!(Region::Eu.track_base_url(), "https://track-eu.customer.io");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// United States data center.
    #[default]
    Us,
    /// European Union data center.
    Eu,
}

impl Region {
    /// Base URL of the Track API.
    pub fn track_base_url(&self) -> &'static str {
        match self {
            Region::Us => "https://track.customer.io",
            Region::Eu => "https://track-eu.customer.io",
        }
    }

    /// Base URL of the App API.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Region::Us => "https://api.customer.io",
            Region::Eu => "https://api-eu.customer.io",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Us => write!(f, "us"),
            Region::Eu => write!(f, "eu"),
        }
    }
}
