//! Identity operations.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::client::{ClientInner, NO_BODY};
use crate::error::require;
use crate::models::{Attributes, Customer, Identifier};
use crate::{Error, Result};

/// Service for creating, updating, deleting and merging people.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: customerio::TrackClient) -> customerio::Result<()> {
/// use customerio::models::{Customer, Identifier};
///
/// let customer = Customer::with_email("person@example.com").attribute("plan", "pro");
/// client.customers().add_or_update("42", &customer).await?;
///
/// client
///     .customers()
///     .merge(&Identifier::id("42"), &Identifier::email("old@example.com"))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct CustomersService {
    inner: Arc<ClientInner>,
}

impl CustomersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create or update a person with the given attributes.
    pub async fn identify(&self, customer_id: &str, attributes: &Attributes) -> Result<()> {
        require("customer_id", customer_id)?;
        let url = self.customer_url(customer_id)?;
        self.inner.request(Method::PUT, url, Some(attributes)).await?;
        Ok(())
    }

    /// Create or update a person from a [`Customer`].
    ///
    /// Sends the custom attributes plus `created_at` (epoch seconds),
    /// `email`, `id` and `unsubscribed`, each only when set.
    pub async fn add_or_update(&self, customer_id: &str, customer: &Customer) -> Result<()> {
        require("customer_id", customer_id)?;
        let url = self.customer_url(customer_id)?;
        let payload = identify_payload(customer);
        self.inner.request(Method::PUT, url, Some(&payload)).await?;
        Ok(())
    }

    /// Delete a person.
    pub async fn delete(&self, customer_id: &str) -> Result<()> {
        require("customer_id", customer_id)?;
        let url = self.customer_url(customer_id)?;
        self.inner.request(Method::DELETE, url, NO_BODY).await?;
        Ok(())
    }

    /// Merge `secondary` into `primary`; the secondary profile is deleted.
    ///
    /// Both identifiers must be of type `id`, `email` or `cio_id` and carry a
    /// non-blank value, otherwise the call fails with a parameter error
    /// naming `"primary"` or `"secondary"`.
    pub async fn merge(&self, primary: &Identifier, secondary: &Identifier) -> Result<()> {
        if !primary.is_valid_for_merge() {
            return Err(Error::param("primary"));
        }
        if !secondary.is_valid_for_merge() {
            return Err(Error::param("secondary"));
        }

        #[derive(serde::Serialize)]
        struct Request {
            primary: Value,
            secondary: Value,
        }

        let url = self.inner.endpoint("/api/v1/merge_customers")?;
        let body = Request {
            primary: primary.to_json(),
            secondary: secondary.to_json(),
        };
        self.inner.request(Method::POST, url, Some(&body)).await?;
        Ok(())
    }

    fn customer_url(&self, customer_id: &str) -> Result<url::Url> {
        self.inner.endpoint(&format!(
            "/api/v1/customers/{}",
            urlencoding::encode(customer_id)
        ))
    }
}

fn identify_payload(customer: &Customer) -> Attributes {
    let mut payload = customer.attributes.clone();
    if let Some(created_at) = customer.created_at {
        payload.insert("created_at".into(), Value::from(created_at.timestamp()));
    }
    if !customer.email.is_empty() {
        payload.insert("email".into(), Value::from(customer.email.clone()));
    }
    if !customer.id.is_empty() {
        payload.insert("id".into(), Value::from(customer.id.clone()));
    }
    if let Some(unsubscribed) = customer.unsubscribed {
        payload.insert("unsubscribed".into(), Value::from(unsubscribed));
    }
    payload
}
