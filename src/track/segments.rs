//! Manual segment membership.

use std::sync::Arc;

use reqwest::Method;

use crate::client::ClientInner;
use crate::models::{Customer, IdentifierType};
use crate::{Error, Result};

/// Service for adding people to manual segments.
pub struct ManualSegmentsService {
    inner: Arc<ClientInner>,
}

impl ManualSegmentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Add customers to a manual segment, addressing each by `id_type`.
    ///
    /// Customers without a value for that identifier are skipped. Returns the
    /// number of identifiers actually submitted.
    ///
    /// # Errors
    ///
    /// A parameter error naming `"id_type"` if the type does not address
    /// customers (anything other than `id`, `email` or `cio_id`).
    pub async fn add_customers(
        &self,
        segment_id: u64,
        customers: &[Customer],
        id_type: IdentifierType,
    ) -> Result<usize> {
        if !id_type.is_customer_identifier() {
            return Err(Error::param("id_type"));
        }

        #[derive(serde::Serialize)]
        struct Request<'a> {
            ids: Vec<&'a str>,
        }

        let ids: Vec<&str> = customers
            .iter()
            .filter_map(|c| c.identifier(id_type))
            .collect();
        let submitted = ids.len();

        let url = self.inner.endpoint_with_query(
            &format!("/api/v1/segments/{segment_id}/add_customers"),
            &[("id_type", id_type.as_str())],
        )?;
        self.inner
            .request(Method::POST, url, Some(&Request { ids }))
            .await?;
        Ok(submitted)
    }
}
