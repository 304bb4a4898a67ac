//! API Errors

use thiserror::Error;

/// Result type for every call against the food service
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures surfaced by the REST client
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, aborted fetch)
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    /// The response body did not match the expected shape
    #[error("unexpected body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP status of the failed call, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
