//! Site identifier and secret key pair.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Environment variable read by [`Credentials::from_env`] for the site id.
pub const SITE_ID_ENV: &str = "CUSTOMERIO_SITE_ID";

/// Environment variable read by [`Credentials::from_env`] for the key.
pub const API_KEY_ENV: &str = "CUSTOMERIO_API_KEY";

/// A site identifier and secret key.
///
/// Immutable once built. The key is kept in a [`SecretString`] so it never
/// shows up in `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    site_id: String,
    api_key: SecretString,
}

impl Credentials {
    /// Create credentials from a site id and key.
    ///
    /// No validation is performed; empty strings are accepted.
    pub fn new(site_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            api_key: SecretString::from(api_key.into()),
        }
    }

    /// Read credentials from `CUSTOMERIO_SITE_ID` and `CUSTOMERIO_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let site_id = std::env::var(SITE_ID_ENV)
            .map_err(|_| Error::Config(format!("{SITE_ID_ENV} is not set")))?;
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::Config(format!("{API_KEY_ENV} is not set")))?;
        Ok(Self::new(site_id, api_key))
    }

    /// The site identifier.
    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    /// The `Authorization` header value: `Basic base64("<site_id>:<api_key>")`.
    pub fn basic_auth(&self) -> String {
        let raw = format!("{}:{}", self.site_id, self.api_key.expose_secret());
        format!("Basic {}", STANDARD.encode(raw))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("site_id", &self.site_id)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
