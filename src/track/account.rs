//! Workspace-level lookups.

use std::sync::Arc;

use reqwest::Method;

use crate::client::{ClientInner, NO_BODY};
use crate::models::AccountRegion;
use crate::Result;

/// Service for account metadata.
pub struct AccountService {
    inner: Arc<ClientInner>,
}

impl AccountService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Resolve which data-residency region the credentials belong to.
    pub async fn region(&self) -> Result<AccountRegion> {
        let url = self.inner.endpoint("/api/v1/accounts/region")?;
        self.inner.request(Method::GET, url, NO_BODY).await?.decode()
    }
}
