//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    /// A required collaborator or field is missing (no wallet account, no
    /// signature and no signer for a listing query).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller-supplied values are inconsistent with each other.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Signing error: {0}")]
    Signing(#[from] SigningError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// The exchange answered with a status outside `200..300`.
///
/// `data` is the response body parsed as JSON, passed through verbatim.
#[derive(Error, Debug, Clone)]
#[error("Aster request failed with status {status}")]
pub struct RequestError {
    pub status: u16,
    pub url: String,
    pub data: serde_json::Value,
}

/// Transport-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("Response from {url} (status {status}) is not valid JSON: {message}")]
    InvalidJson {
        status: u16,
        url: String,
        message: String,
    },

    /// Failure reported by a custom [`HttpTransport`](crate::http::HttpTransport)
    /// that has no richer error of its own.
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Errors reported by a typed-data signer.
#[derive(Error, Debug, Clone)]
pub enum SigningError {
    #[error("EIP-712 encoding failed: {0}")]
    Eip712(String),

    #[error("Wallet error: {0}")]
    Wallet(String),
}

impl SdkError {
    /// The HTTP status of a failed request, if this error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Request(e) => Some(e.status),
            SdkError::Http(HttpError::InvalidJson { status, .. }) => Some(*status),
            _ => None,
        }
    }
}
