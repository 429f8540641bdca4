//! Error types for the console's API boundary.
//!
//! The only fallible surface in this application is fetching JSON from the
//! backend REST API; everything else is pure view state. [`FetchError`]
//! covers that boundary with one variant per distinct failure the browser
//! Fetch API can produce.

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests to the backend API.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, connection refused, etc.)
    #[error("network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("failed to read response")]
    ResponseReadFailed,
    /// Response body was not text
    #[error("invalid response content")]
    InvalidContent,
    /// Response text was not the expected JSON shape
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request exceeded the configured timeout
    #[error("request timed out")]
    Timeout,
}
