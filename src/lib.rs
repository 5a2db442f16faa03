//! # customerio
//!
//! An async Rust client for the Customer.io Track and App APIs.
//!
//! The crate turns typed method calls into authenticated HTTP requests and
//! HTTP responses into typed values or typed errors. It does no retrying,
//! caching or batching of its own: every call is exactly one round trip.
//!
//! ## Features
//!
//! - **Track API** ([`TrackClient`]): identify and delete people, track
//!   events, register devices, merge profiles, batch submissions
//! - **App API** ([`ApiClient`]): look up customers, list segments, query
//!   custom objects
//! - **Typed errors**: parameter errors are raised before any network call,
//!   non-success statuses keep the raw body for diagnostics
//! - **Regions**: US and EU data centers, or any base URL override
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use customerio::{TrackClient, ApiClient};
//! use customerio::models::IdentifierType;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> customerio::Result<()> {
//!     let track = TrackClient::new("site-id", "api-key")?;
//!
//!     let attrs = json!({"email": "person@example.com"});
//!     track.customers().identify("42", attrs.as_object().unwrap()).await?;
//!
//!     let data = json!({"sku": "A-1", "price": 30});
//!     track.events().track("42", "purchased", data.as_object().unwrap()).await?;
//!
//!     let api = ApiClient::new("site-id", "api-key")?;
//!     let ids = api
//!         .customers()
//!         .lookup_ids(&["person@example.com"], IdentifierType::Email)
//!         .await?;
//!     println!("cio_id: {}", ids[0]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Handling a missing customer
//!
//! ```rust,no_run
//! use customerio::{ApiClient, Error};
//! use customerio::models::IdentifierType;
//!
//! # async fn example(api: ApiClient) -> customerio::Result<()> {
//! match api.customers().attributes("42", IdentifierType::Id).await {
//!     Ok(customer) => println!("created at {:?}", customer.created_at),
//!     Err(Error::CustomerNotFound) => println!("unknown customer"),
//!     Err(other) => return Err(other),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod track;

// Re-export primary types at crate root for convenience
pub use auth::Credentials;
pub use client::{ApiClient, ClientConfig, TrackClient, DEFAULT_USER_AGENT};
pub use error::{Error, Result};
pub use models::{Attributes, Customer, Identifier, IdentifierType, Region};

/// Prelude module for convenient imports.
///
/// ```rust
/// use customerio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::Credentials;
    pub use crate::client::{ApiClient, ClientConfig, TrackClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        AccountRegion, AttributeCondition, Attributes, CustomObjectType, Customer, Filter,
        Identifier, IdentifierType, Region, Segment,
    };
}
