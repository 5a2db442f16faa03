//! Event tracking.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;

use crate::client::ClientInner;
use crate::error::require;
use crate::models::Attributes;
use crate::Result;

/// Service for sending events.
pub struct EventsService {
    inner: Arc<ClientInner>,
}

#[derive(Serialize)]
struct EventRequest<'a> {
    name: &'a str,
    data: &'a Attributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    anonymous_id: Option<&'a str>,
}

impl EventsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Send a named event for a known person.
    pub async fn track(&self, customer_id: &str, name: &str, data: &Attributes) -> Result<()> {
        require("customer_id", customer_id)?;
        require("event_name", name)?;

        let url = self.inner.endpoint(&format!(
            "/api/v1/customers/{}/events",
            urlencoding::encode(customer_id)
        ))?;
        let body = EventRequest {
            name,
            data,
            anonymous_id: None,
        };
        self.inner.request(Method::POST, url, Some(&body)).await?;
        Ok(())
    }

    /// Send a named event not tied to a known person.
    ///
    /// `anonymous_id` is optional: pass `""` to omit it from the payload.
    pub async fn track_anonymous(
        &self,
        anonymous_id: &str,
        name: &str,
        data: &Attributes,
    ) -> Result<()> {
        require("event_name", name)?;

        let url = self.inner.endpoint("/api/v1/events")?;
        let body = EventRequest {
            name,
            data,
            anonymous_id: (!anonymous_id.is_empty()).then_some(anonymous_id),
        };
        self.inner.request(Method::POST, url, Some(&body)).await?;
        Ok(())
    }

    /// Submit already-shaped track actions in a single request.
    ///
    /// The list is sent as-is; any size limit is enforced by the remote side
    /// and surfaces as an [`Error::Api`](crate::Error::Api).
    pub async fn batch(&self, actions: &[Attributes]) -> Result<()> {
        #[derive(Serialize)]
        struct Request<'a> {
            batch: &'a [Attributes],
        }

        let url = self.inner.endpoint("/api/v2/batch")?;
        self.inner
            .request(Method::POST, url, Some(&Request { batch: actions }))
            .await?;
        Ok(())
    }
}
