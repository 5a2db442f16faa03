//! Enumeration types for the Customer.io API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The field an identifier value refers to.
///
/// Only [`Id`](IdentifierType::Id), [`Email`](IdentifierType::Email) and
/// [`CioId`](IdentifierType::CioId) address customers; the remaining
/// variants are used by object endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierType {
    /// Caller-assigned customer id
    Id,
    /// Email address
    Email,
    /// Platform-assigned canonical id
    CioId,
    /// Object name
    Name,
    /// Platform-assigned object id
    CioObjectId,
    /// Caller-assigned object id
    ObjectId,
}

impl IdentifierType {
    /// The wire name, e.g. `"cio_id"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierType::Id => "id",
            IdentifierType::Email => "email",
            IdentifierType::CioId => "cio_id",
            IdentifierType::Name => "name",
            IdentifierType::CioObjectId => "cio_object_id",
            IdentifierType::ObjectId => "object_id",
        }
    }

    /// Returns `true` for the types that can address a customer.
    pub fn is_customer_identifier(&self) -> bool {
        matches!(
            self,
            IdentifierType::Id | IdentifierType::Email | IdentifierType::CioId
        )
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
