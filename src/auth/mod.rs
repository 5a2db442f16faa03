//! Credentials and request authentication.
//!
//! Both Customer.io API families authenticate with HTTP Basic auth built
//! from a site identifier and a secret key.
//!
//! ```
//! use customerio::Credentials;
//!
//! let creds = Credentials::new("site-id", "secret-key");
//! assert!(creds.basic_auth().starts_with("Basic "));
//! ```

mod credentials;

pub use credentials::{Credentials, API_KEY_ENV, SITE_ID_ENV};
