//! Client configuration options.

use std::time::Duration;

use crate::Region;

/// User-Agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("customerio-rs/", env!("CARGO_PKG_VERSION"));

/// Configuration for a [`TrackClient`](crate::TrackClient) or
/// [`ApiClient`](crate::ApiClient).
///
/// Assembled once and handed to the client at construction; the client never
/// mutates it afterwards.
///
/// # Example
///
/// ```
/// use customerio::{ClientConfig, Region};
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_region(Region::Eu)
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Data-residency region; picks the default base URLs
    pub region: Region,
    /// Base URL override, taking precedence over the region default
    pub base_url: Option<String>,
    /// User-Agent header value
    pub user_agent: String,
    /// Per-request timeout for the built-in transport
    pub timeout: Duration,
    /// Idle connections kept per host by the built-in transport
    pub pool_max_idle_per_host: usize,
    /// Caller-supplied transport; when set, `timeout` and
    /// `pool_max_idle_per_host` are the caller's responsibility
    pub http_client: Option<reqwest::Client>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: Region::default(),
            base_url: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            pool_max_idle_per_host: 100,
            http_client: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data-residency region.
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the idle connection pool size per host.
    pub fn with_pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    /// Use a caller-built `reqwest::Client` as the transport.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub(crate) fn track_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.region.track_base_url())
    }

    pub(crate) fn api_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.region.api_base_url())
    }
}
