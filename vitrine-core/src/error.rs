//! Catalog error types
//!
//! Transport failures are split by where they happened: the request never
//! completed (`Network`), the backend answered with a non-success status
//! (`Request`), or a success body did not have the expected shape (`Decode`).

use thiserror::Error;

/// Errors produced by the catalog client and its flows
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The request could not be sent or completed (refused, DNS, timeout)
    #[error("Could not reach the product backend at {url}")]
    Network {
        url: String,
        timed_out: bool,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status
    #[error("Product backend returned HTTP {status} for {method} {url}")]
    Request {
        method: &'static str,
        url: String,
        status: u16,
    },

    /// A success response carried a body that is not the expected JSON
    #[error("Failed to decode product backend response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// User input that cannot be turned into a request
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// Client configuration problems
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// HTTP status carried by a `Request` failure
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend could not be reached at all
    pub fn is_network(&self) -> bool {
        matches!(self, CatalogError::Network { .. })
    }

    /// Whether the failure was a client-side timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, CatalogError::Network { timed_out: true, .. })
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
