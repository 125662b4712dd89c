//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or bad URL).
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    /// The body could not be decoded into the expected shape.
    #[error("Malformed response: {0}")]
    InvalidResponse(String),
}
