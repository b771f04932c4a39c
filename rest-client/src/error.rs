//! Error types for the REST client

use thiserror::Error;

/// Errors that can occur during HTTP communication
#[derive(Debug, Error)]
pub enum RestError {
    /// Network-level communication error
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status returned by the server
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },

    /// Response body could not be parsed as JSON
    #[error("invalid JSON in response body: {0}")]
    Json(String),
}
