//! Audience filters accepted by the App API search endpoints.

use serde::{Deserialize, Serialize};

/// A boolean combination of attribute conditions.
///
/// # Example
///
/// ```
/// use customerio::models::{AttributeCondition, Filter};
///
/// let filter = Filter::any([
///     AttributeCondition::equals("email", "a@example.com"),
///     AttributeCondition::equals("email", "b@example.com"),
/// ]);
/// assert_eq!(filter.or.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Matches when any condition holds
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub or: Vec<AttributeCondition>,
    /// Matches when every condition holds
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub and: Vec<AttributeCondition>,
}

impl Filter {
    /// OR-combine the given conditions.
    pub fn any(conditions: impl IntoIterator<Item = AttributeCondition>) -> Self {
        Self {
            or: conditions.into_iter().collect(),
            and: Vec::new(),
        }
    }

    /// AND-combine the given conditions.
    pub fn all(conditions: impl IntoIterator<Item = AttributeCondition>) -> Self {
        Self {
            or: Vec::new(),
            and: conditions.into_iter().collect(),
        }
    }
}

/// A single condition on an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeCondition {
    /// The attribute test
    pub attribute: AttributeMatch,
}

/// Field, operator and operand of an attribute test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeMatch {
    /// Attribute name
    pub field: String,
    /// Comparison operator, e.g. `"eq"`
    pub operator: String,
    /// Operand
    pub value: String,
}

impl AttributeCondition {
    /// An equality test: `field == value`.
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attribute: AttributeMatch {
                field: field.into(),
                operator: "eq".to_string(),
                value: value.into(),
            },
        }
    }
}
