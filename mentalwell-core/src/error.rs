//! Error types for the MentalWell client.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the backend or managing the session.
#[derive(Debug, Error)]
pub enum Error {
    /// An authenticated endpoint was called with no stored token.
    ///
    /// Raised before any network I/O happens.
    #[error("no access token found, please log in")]
    MissingCredential,

    /// Transport-level failure (connection refused, timeout, TLS, ...).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("server returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("invalid API response: {0}")]
    InvalidResponse(String),

    /// Client-side validation rejected the input before submission.
    #[error("{0}")]
    Validation(String),

    /// The stored token could not be decoded.
    #[error("token decode error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Session store read/write failure.
    #[error("session store error: {0}")]
    Store(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
