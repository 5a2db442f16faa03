//! HTTP client implementation for the Customer.io APIs.

use std::sync::Arc;

use reqwest::header::{
    HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT,
};
use reqwest::{Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::api::{CustomerLookupService, ObjectsService, SegmentsService};
use crate::auth::Credentials;
use crate::track::{
    AccountService, CustomersService, DevicesService, EventsService, ManualSegmentsService,
};
use crate::{Error, Result};

use super::config::ClientConfig;

/// Placeholder body type for requests without a payload.
pub(crate) const NO_BODY: Option<&()> = None;

/// Client for the Track API: identities, events, devices and batches.
///
/// Cheap to clone; clones share the same connection pool.
///
/// # Example
///
/// ```no_run
/// use customerio::TrackClient;
/// use serde_json::json;
///
/// # async fn example() -> customerio::Result<()> {
/// let client = TrackClient::new("site-id", "api-key")?;
///
/// let attrs = json!({"email": "person@example.com", "plan": "pro"});
/// client.customers().identify("42", attrs.as_object().unwrap()).await?;
/// client.events().track("42", "purchased", &Default::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TrackClient {
    pub(crate) inner: Arc<ClientInner>,
}

/// Client for the App API: customer, segment and custom object queries.
///
/// # Example
///
/// ```no_run
/// use customerio::ApiClient;
///
/// # async fn example() -> customerio::Result<()> {
/// let client = ApiClient::new("site-id", "api-key")?;
/// for segment in client.segments().list().await? {
///     println!("{} {}", segment.id, segment.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) credentials: Credentials,
    pub(crate) config: ClientConfig,
    pub(crate) base_url: Url,
}

impl TrackClient {
    /// Create a Track API client with default configuration.
    pub fn new(site_id: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(Credentials::new(site_id, api_key), ClientConfig::default())
    }

    /// Create a Track API client from credentials and a configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let base = config.track_base_url().to_string();
        Ok(Self {
            inner: Arc::new(ClientInner::new(credentials, config, &base)?),
        })
    }

    /// Create a Track API client from `CUSTOMERIO_SITE_ID`/`CUSTOMERIO_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::with_config(Credentials::from_env()?, ClientConfig::default())
    }

    /// Identity operations.
    pub fn customers(&self) -> CustomersService {
        CustomersService::new(self.inner.clone())
    }

    /// Event tracking.
    pub fn events(&self) -> EventsService {
        EventsService::new(self.inner.clone())
    }

    /// Device registration.
    pub fn devices(&self) -> DevicesService {
        DevicesService::new(self.inner.clone())
    }

    /// Manual segment membership.
    pub fn segments(&self) -> ManualSegmentsService {
        ManualSegmentsService::new(self.inner.clone())
    }

    /// Workspace-level lookups.
    pub fn account(&self) -> AccountService {
        AccountService::new(self.inner.clone())
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }
}

impl ApiClient {
    /// Create an App API client with default configuration.
    pub fn new(site_id: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(Credentials::new(site_id, api_key), ClientConfig::default())
    }

    /// Create an App API client from credentials and a configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let base = config.api_base_url().to_string();
        Ok(Self {
            inner: Arc::new(ClientInner::new(credentials, config, &base)?),
        })
    }

    /// Create an App API client from `CUSTOMERIO_SITE_ID`/`CUSTOMERIO_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::with_config(Credentials::from_env()?, ClientConfig::default())
    }

    /// Customer lookups.
    pub fn customers(&self) -> CustomerLookupService {
        CustomerLookupService::new(self.inner.clone())
    }

    /// Segment queries.
    pub fn segments(&self) -> SegmentsService {
        SegmentsService::new(self.inner.clone())
    }

    /// Custom object queries.
    pub fn objects(&self) -> ObjectsService {
        ObjectsService::new(self.inner.clone())
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }
}

impl ClientInner {
    fn new(credentials: Credentials, config: ClientConfig, base: &str) -> Result<Self> {
        let base_url = Url::parse(base.trim_end_matches('/'))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!("not a base URL: {base}")));
        }

        let http = match &config.http_client {
            Some(client) => client.clone(),
            None => reqwest::Client::builder()
                .timeout(config.timeout)
                .pool_max_idle_per_host(config.pool_max_idle_per_host)
                .build()?,
        };

        Ok(Self {
            http,
            credentials,
            config,
            base_url,
        })
    }

    /// Resolve a path (already percent-escaped) against the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    /// Resolve a path and append query parameters.
    pub(crate) fn endpoint_with_query(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.endpoint(path)?;
        url.query_pairs_mut().extend_pairs(query);
        Ok(url)
    }

    /// Build request headers with authentication.
    fn build_headers(&self, content_length: Option<usize>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.config.user_agent)
                .map_err(|_| Error::Config("invalid user agent".to_string()))?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&self.credentials.basic_auth())
                .map_err(|_| Error::Config("invalid credentials".to_string()))?,
        );

        if let Some(len) = content_length {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            headers.insert(CONTENT_LENGTH, HeaderValue::from(len));
        }

        Ok(headers)
    }

    /// Perform exactly one round trip and return the raw outcome, whatever
    /// its status.
    pub(crate) async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<RawResponse> {
        let payload = body
            .map(|b| serde_json::to_vec(b))
            .transpose()
            .map_err(Error::Serialization)?;
        let headers = self.build_headers(payload.as_ref().map(Vec::len))?;

        tracing::debug!(%method, %url, "sending request");

        let mut request = self.http.request(method, url.clone()).headers(headers);
        if let Some(payload) = payload {
            request = request.body(payload);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "received response");

        Ok(RawResponse {
            status,
            url: url.into(),
            body,
        })
    }

    /// Round trip that only accepts `200 OK`.
    pub(crate) async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<RawResponse> {
        self.execute(method, url, body).await?.ok()
    }
}

/// Status, URL and fully-read body of a completed round trip.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub(crate) status: StatusCode,
    pub(crate) url: String,
    pub(crate) body: Vec<u8>,
}

impl RawResponse {
    /// Pass `200 OK` through, turn anything else into [`Error::Api`].
    pub(crate) fn ok(self) -> Result<Self> {
        if self.status == StatusCode::OK {
            Ok(self)
        } else {
            Err(self.into_error())
        }
    }

    pub(crate) fn into_error(self) -> Error {
        Error::Api {
            status: self.status.as_u16(),
            url: self.url,
            body: String::from_utf8_lossy(&self.body).into_owned(),
        }
    }

    pub(crate) fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

impl std::fmt::Debug for TrackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("credentials", &self.inner.credentials)
            .field("config", &self.inner.config)
            .finish()
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("credentials", &self.inner.credentials)
            .field("config", &self.inner.config)
            .finish()
    }
}
