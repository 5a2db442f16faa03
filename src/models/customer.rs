//! Customer model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::primitives::{null_as_default, Attributes};

/// A Customer.io person profile.
///
/// This is a transfer object: it is built fresh from every response and
/// owns nothing beyond its fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Arbitrary custom attributes
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    /// Platform-assigned canonical id
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub cio_id: String,
    /// Creation time, carried on the wire as epoch seconds
    #[serde(default, with = "epoch_seconds")]
    pub created_at: Option<DateTime<Utc>>,
    /// Email address
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub email: String,
    /// Caller-assigned id
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    /// Whether the person has unsubscribed; `None` leaves it untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsubscribed: Option<bool>,
}

impl Customer {
    /// A customer addressed by caller-assigned id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// A customer addressed by email.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    /// Set a custom attribute.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The value of the given identifier field, or `None` when it is empty
    /// or the type does not address customers.
    pub fn identifier(&self, id_type: super::IdentifierType) -> Option<&str> {
        use super::IdentifierType;

        let value = match id_type {
            IdentifierType::Id => &self.id,
            IdentifierType::Email => &self.email,
            IdentifierType::CioId => &self.cio_id,
            _ => return None,
        };
        (!value.is_empty()).then_some(value.as_str())
    }
}

/// Parse a seconds-since-epoch value. Zero means "unset"; any other value
/// must be a representable timestamp.
pub(crate) fn from_epoch_seconds(secs: i64) -> Result<Option<DateTime<Utc>>, String> {
    if secs == 0 {
        return Ok(None);
    }
    DateTime::from_timestamp(secs, 0)
        .map(Some)
        .ok_or_else(|| format!("created_at out of range: {secs}"))
}

/// `created_at` codec.
///
/// Always encodes an integer (0 when unset). Decodes an integer, a numeric
/// string or an RFC 3339 string; 0, `null` and `""` decode as unset.
pub(crate) mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(value.map(|t| t.timestamp()).unwrap_or(0))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::Number(n) => {
                let secs = match n.as_i64() {
                    Some(secs) => secs,
                    None => n
                        .as_f64()
                        .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                        .map(|f| f as i64)
                        .ok_or_else(|| D::Error::custom(format!("created_at out of range: {n}")))?,
                };
                super::from_epoch_seconds(secs).map_err(D::Error::custom)
            }
            Value::String(s) if s.is_empty() => Ok(None),
            Value::String(s) => {
                if let Ok(secs) = s.parse::<i64>() {
                    return super::from_epoch_seconds(secs).map_err(D::Error::custom);
                }
                DateTime::parse_from_rfc3339(&s)
                    .map(|t| Some(t.with_timezone(&Utc)))
                    .map_err(D::Error::custom)
            }
            other => Err(D::Error::custom(format!(
                "created_at: unexpected value {other}"
            ))),
        }
    }
}
