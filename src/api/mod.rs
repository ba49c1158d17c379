//! JSON REST client.
//!
//! DESIGN
//! ======
//! One `ApiClient` per origin. Every call is a single attempt: no retry, no
//! backoff, no client-side timeout. Callers await the result and can abandon
//! it through a `CancellationToken`.

pub mod client;

pub use client::{ApiClient, RequestOptions};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by API client calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request body could not be encoded as JSON.
    #[error("request body encode failed: {0}")]
    Encode(serde_json::Error),

    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered outside the 2xx range.
    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("response parse failed: {0}")]
    Decode(serde_json::Error),

    /// The caller cancelled the request before it completed.
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// HTTP status carried by a `Status` error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
