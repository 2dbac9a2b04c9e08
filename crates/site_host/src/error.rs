//! Error taxonomy for content retrieval.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure modes of a content-document retrieval.
pub enum ContentError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("content request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status code.
    #[error("content request returned status {0}")]
    Status(u16),
    /// The response body was not a JSON object.
    #[error("content body is malformed: {0}")]
    Malformed(String),
    /// The active target has no network transport.
    #[error("content fetching is only available when compiled for wasm32")]
    Unsupported,
}
