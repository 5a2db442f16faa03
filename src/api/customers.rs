//! Customer lookups.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{ClientInner, RawResponse, NO_BODY};
use crate::error::require;
use crate::models::customer::from_epoch_seconds;
use crate::models::primitives::null_as_default;
use crate::models::{AttributeCondition, Attributes, Customer, Filter, IdentifierType};
use crate::{Error, Result};

/// Largest number of identifiers [`CustomerLookupService::lookup_ids`] accepts.
pub const MAX_LOOKUP_IDS: usize = 1000;

/// Service for finding people.
///
/// The lookups here answer a 404 with [`Error::CustomerNotFound`] rather
/// than a generic [`Error::Api`].
///
/// # Example
///
/// ```no_run
/// # async fn example(client: customerio::ApiClient) -> customerio::Result<()> {
/// use customerio::models::IdentifierType;
///
/// match client.customers().attributes("42", IdentifierType::Id).await {
///     Ok(customer) => println!("{:?}", customer.email),
///     Err(customerio::Error::CustomerNotFound) => println!("no such person"),
///     Err(e) => return Err(e),
/// }
/// # Ok(())
/// # }
/// ```
pub struct CustomerLookupService {
    inner: Arc<ClientInner>,
}

impl CustomerLookupService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch a person's profile and attributes.
    pub async fn attributes(&self, customer_id: &str, id_type: IdentifierType) -> Result<Customer> {
        require("customer_id", customer_id)?;

        let url = self.inner.endpoint_with_query(
            &format!(
                "/v1/customers/{}/attributes",
                urlencoding::encode(customer_id)
            ),
            &[("id_type", id_type.as_str())],
        )?;
        let raw = self.inner.execute(Method::GET, url, NO_BODY).await?;
        let envelope: AttributesEnvelope = not_found_or_ok(raw)?.decode()?;
        envelope.customer.attributes.into_customer()
    }

    /// Resolve `cio_id`s for up to [`MAX_LOOKUP_IDS`] identifiers at once.
    ///
    /// The result has the same length and order as `ids`; identifiers with
    /// no match map to `""`. Emails are correlated case-insensitively.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] without any network call when more than
    /// [`MAX_LOOKUP_IDS`] identifiers are given.
    pub async fn lookup_ids<S: AsRef<str>>(
        &self,
        ids: &[S],
        id_type: IdentifierType,
    ) -> Result<Vec<String>> {
        if ids.len() > MAX_LOOKUP_IDS {
            return Err(Error::InvalidInput(format!(
                "can only look up {MAX_LOOKUP_IDS} customers at a time, got {}",
                ids.len()
            )));
        }
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        #[derive(Serialize)]
        struct Request {
            filter: Filter,
        }

        #[derive(Deserialize)]
        struct Response {
            #[serde(default)]
            identifiers: Vec<Attributes>,
        }

        let field = id_type.as_str();
        let body = Request {
            filter: Filter::any(
                ids.iter()
                    .map(|id| AttributeCondition::equals(field, id.as_ref())),
            ),
        };

        let url = self
            .inner
            .endpoint_with_query("/v1/customers", &[("limit", "1000")])?;
        let response: Response = self
            .inner
            .request(Method::POST, url, Some(&body))
            .await?
            .decode()?;

        let matches: HashMap<String, String> = response
            .identifiers
            .iter()
            .filter_map(|row| {
                let key = value_as_string(row.get(field)?)?;
                let cio_id = row.get("cio_id").and_then(value_as_string).unwrap_or_default();
                Some((normalize(id_type, &key).into_owned(), cio_id))
            })
            .collect();

        Ok(ids
            .iter()
            .map(|id| {
                matches
                    .get(&*normalize(id_type, id.as_ref()))
                    .cloned()
                    .unwrap_or_default()
            })
            .collect())
    }

    /// Find the `cio_id`s of every person with the given email.
    pub async fn lookup_by_email(&self, email: &str) -> Result<Vec<String>> {
        require("email", email)?;

        #[derive(Deserialize)]
        struct Response {
            #[serde(default)]
            results: Vec<Match>,
        }

        #[derive(Deserialize)]
        struct Match {
            #[serde(default, deserialize_with = "null_as_default")]
            cio_id: String,
        }

        let url = self
            .inner
            .endpoint_with_query("/v1/customers", &[("email", email)])?;
        let raw = self.inner.execute(Method::GET, url, NO_BODY).await?;
        let response: Response = not_found_or_ok(raw)?.decode()?;
        Ok(response.results.into_iter().map(|m| m.cio_id).collect())
    }
}

fn not_found_or_ok(raw: RawResponse) -> Result<RawResponse> {
    if raw.status == StatusCode::NOT_FOUND {
        return Err(Error::CustomerNotFound);
    }
    raw.ok()
}

/// Emails match case-insensitively.
fn normalize(id_type: IdentifierType, value: &str) -> Cow<'_, str> {
    if id_type == IdentifierType::Email {
        Cow::Owned(value.to_lowercase())
    } else {
        Cow::Borrowed(value)
    }
}

fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[derive(Deserialize)]
struct AttributesEnvelope {
    customer: AttributesCustomer,
}

#[derive(Deserialize)]
struct AttributesCustomer {
    attributes: LegacyAttributes,
}

/// Profile as returned by the attributes endpoint. Every field arrives as a
/// string, including `created_at` (epoch seconds) and `attributes` (a
/// JSON document encoded as a string).
#[derive(Deserialize)]
struct LegacyAttributes {
    #[serde(default, deserialize_with = "null_as_default")]
    attributes: String,
    #[serde(default, deserialize_with = "null_as_default")]
    cio_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    id: String,
}

impl LegacyAttributes {
    fn into_customer(self) -> Result<Customer> {
        let created_at = if self.created_at.is_empty() {
            None
        } else {
            let secs: i64 = self.created_at.parse().map_err(|_| {
                Error::InvalidResponse(format!("created_at is not epoch seconds: {}", self.created_at))
            })?;
            from_epoch_seconds(secs).map_err(Error::InvalidResponse)?
        };

        Ok(Customer {
            attributes: decode_string_encoded_attributes(&self.attributes)?,
            cio_id: self.cio_id,
            created_at,
            email: self.email,
            id: self.id,
            unsubscribed: None,
        })
    }
}

/// Legacy compatibility: the attributes endpoint ships the attribute map as a
/// JSON string, sometimes quoted a second time. Unescape the outer string if
/// present, then parse the document. An empty field is an empty map.
fn decode_string_encoded_attributes(raw: &str) -> Result<Attributes> {
    let raw = raw.trim();
    let document: Cow<'_, str> = if raw.starts_with('"') {
        Cow::Owned(serde_json::from_str::<String>(raw)?)
    } else {
        Cow::Borrowed(raw)
    };

    if document.trim().is_empty() {
        return Ok(Attributes::new());
    }
    Ok(serde_json::from_str(&document)?)
}
