//! HTTP clients and the shared request pipeline.
//!
//! Two entry points mirror Customer.io's two API families:
//!
//! - [`TrackClient`] for the Track API (identities, events, devices)
//! - [`ApiClient`] for the App API (customer, segment and object queries)
//!
//! Both authenticate with HTTP Basic auth and share one request executor.
//!
//! # Example
//!
//! ```no_run
//! use customerio::{ApiClient, ClientConfig, Credentials, Region};
//!
//! # fn example() -> customerio::Result<()> {
//! let config = ClientConfig::default().with_region(Region::Eu);
//! let client = ApiClient::with_config(Credentials::new("site-id", "api-key"), config)?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::{ClientConfig, DEFAULT_USER_AGENT};
pub use http::{ApiClient, TrackClient};
pub(crate) use http::{ClientInner, RawResponse, NO_BODY};
