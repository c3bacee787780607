//! NetBox client errors

use thiserror::Error;

use crate::smoke::ResourceCategory;

/// Errors that can occur when interacting with the NetBox API
#[derive(Debug, Error)]
pub enum NetBoxError {
    /// Transport-level failure (connection refused, DNS, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded into the expected model
    #[error("Decode error: {0}")]
    Decode(String),

    /// Token rejected by the server (401/403)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// NetBox API returned any other non-success status
    #[error("NetBox API error: {0}")]
    Api(String),

    /// A success status arrived with nothing to decode (e.g. 204)
    #[error("Empty response body with HTTP {0}")]
    EmptyBody(u16),
}

impl NetBoxError {
    /// True when the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(e) if !e.is_builder())
    }
}

/// A failed smoke check for one resource category.
#[derive(Debug, Error)]
pub enum SmokeFailure {
    /// The call itself failed (transport, decoding or a non-success status)
    #[error("{category}: request failed: {source}")]
    Request {
        /// Category being checked
        category: ResourceCategory,
        /// Underlying client error
        #[source]
        source: NetBoxError,
    },

    /// The call succeeded with a status other than 200
    #[error("{category}: expected HTTP 200, got {actual}")]
    UnexpectedStatus {
        /// Category being checked
        category: ResourceCategory,
        /// Status the server returned
        actual: u16,
    },

    /// The payload lacked a field the check requires
    #[error("{category}: response is missing `{field}`")]
    MissingField {
        /// Category being checked
        category: ResourceCategory,
        /// Missing key
        field: &'static str,
    },
}

impl SmokeFailure {
    /// Category the failure belongs to.
    pub fn category(&self) -> ResourceCategory {
        match self {
            Self::Request { category, .. }
            | Self::UnexpectedStatus { category, .. }
            | Self::MissingField { category, .. } => *category,
        }
    }
}
