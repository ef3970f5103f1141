//! Client Errors

use thiserror::Error;

/// Common result type for collection calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single remote call.
///
/// Every variant means the call did not complete as requested; callers
/// treat them alike and only use the variant for diagnostics.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the connection broke
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("{url} responded with HTTP {status}")]
    Status { status: u16, url: String },

    /// The body was not the JSON we expected
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured server address is unusable
    #[error("invalid base URL {url:?}: {reason}")]
    BaseUrl { url: String, reason: String },
}
