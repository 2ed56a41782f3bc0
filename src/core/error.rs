//! Error types for node loading.
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`LoadError`] - Errors surfaced by [`Loader::ensure`](crate::core::Loader::ensure)
//!
//! Both are `Clone` because a single in-flight result is handed to every
//! caller waiting on the same identifier.

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, connection refused, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Node lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The source has no node for this identifier
    #[error("node not found: {0}")]
    NotFound(String),
    /// The lookup call itself failed
    #[error("transport error: {0}")]
    Transport(#[from] FetchError),
}
