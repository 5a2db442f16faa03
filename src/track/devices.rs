//! Device registration.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::client::{ClientInner, NO_BODY};
use crate::error::require;
use crate::models::Attributes;
use crate::Result;

/// Service for registering and removing push devices.
pub struct DevicesService {
    inner: Arc<ClientInner>,
}

impl DevicesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Register (or update) a device for a person.
    ///
    /// Extra `data` is merged into the `device` object next to `id` and
    /// `platform`; those two keys always carry the arguments given here.
    pub async fn add(
        &self,
        customer_id: &str,
        device_id: &str,
        platform: &str,
        data: &Attributes,
    ) -> Result<()> {
        require("customer_id", customer_id)?;
        require("device_id", device_id)?;
        require("platform", platform)?;

        let mut device = data.clone();
        device.insert("id".into(), Value::from(device_id));
        device.insert("platform".into(), Value::from(platform));

        let mut body = Attributes::new();
        body.insert("device".into(), Value::Object(device));

        let url = self.inner.endpoint(&format!(
            "/api/v1/customers/{}/devices",
            urlencoding::encode(customer_id)
        ))?;
        self.inner.request(Method::PUT, url, Some(&body)).await?;
        Ok(())
    }

    /// Remove a device from a person.
    pub async fn delete(&self, customer_id: &str, device_id: &str) -> Result<()> {
        require("customer_id", customer_id)?;
        require("device_id", device_id)?;

        let url = self.inner.endpoint(&format!(
            "/api/v1/customers/{}/devices/{}",
            urlencoding::encode(customer_id),
            urlencoding::encode(device_id)
        ))?;
        self.inner.request(Method::DELETE, url, NO_BODY).await?;
        Ok(())
    }
}
