//! Segment queries.

use std::sync::Arc;

use reqwest::Method;

use crate::client::{ClientInner, NO_BODY};
use crate::models::Segment;
use crate::Result;

/// Service for reading segments.
pub struct SegmentsService {
    inner: Arc<ClientInner>,
}

impl SegmentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List every segment in the workspace.
    pub async fn list(&self) -> Result<Vec<Segment>> {
        #[derive(serde::Deserialize)]
        struct Response {
            segments: Vec<Segment>,
        }

        let url = self.inner.endpoint("/v1/segments")?;
        let response: Response = self
            .inner
            .request(Method::GET, url, NO_BODY)
            .await?
            .decode()?;
        Ok(response.segments)
    }

    /// Get a single segment.
    pub async fn get(&self, segment_id: u64) -> Result<Segment> {
        #[derive(serde::Deserialize)]
        struct Response {
            segment: Segment,
        }

        let url = self.inner.endpoint(&format!("/v1/segments/{segment_id}"))?;
        let response: Response = self
            .inner
            .request(Method::GET, url, NO_BODY)
            .await?
            .decode()?;
        Ok(response.segment)
    }
}
