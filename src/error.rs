//! Error types for the Customer.io API client.
//!
//! Every failure is returned to the immediate caller. Nothing in this crate
//! retries, swallows or logs an error on the caller's behalf.

use thiserror::Error;

/// A specialized `Result` type for Customer.io operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Customer.io API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was missing or blank. Raised before any network call.
    #[error("{param}: missing")]
    Param {
        /// Name of the offending parameter
        param: String,
    },

    /// An outbound payload could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The HTTP round trip itself failed (DNS, connect, timeout, body read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote service answered with a non-success status.
    #[error("{status}: {url} {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// URL the request was sent to
        url: String,
        /// Raw response body, unparsed
        body: String,
    },

    /// A customer lookup answered 404.
    #[error("customer not found")]
    CustomerNotFound,

    /// Input rejected locally before any network call.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A response decoded as JSON but carried a value that could not be interpreted.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn param(name: impl Into<String>) -> Self {
        Error::Param { param: name.into() }
    }

    /// The HTTP status carried by an [`Error::Api`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` for the customer-lookup not-found sentinel.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::CustomerNotFound)
    }

    /// Returns `true` if the transport gave up because the request timed out.
    ///
    /// # Example
    ///
    /// ```
    /// use customerio::Error;
    ///
    /// fn should_back_off(err: &Error) -> bool {
    ///     err.is_timeout() || err.is_server_error()
    /// }
    /// ```
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, 4xx response, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => (400..500).contains(status),
            Error::Param { .. } | Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }
}

/// Fail with [`Error::Param`] when a required argument is empty.
pub(crate) fn require(param: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        Err(Error::param(param))
    } else {
        Ok(())
    }
}
