//! Error types for the REST API client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the analytics API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// The server answered with a non-success status. `message` is the
    /// server's `{"error": ...}` body when one was present.
    #[error("Server returned {status}: {message}")]
    Server { status: StatusCode, message: String },
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
