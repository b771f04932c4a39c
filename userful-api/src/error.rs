use rest_client::RestError;
use thiserror::Error;

/// High-level errors for Userful API operations
///
/// Transport failures are propagated unchanged from the underlying REST
/// client; the remaining variants cover the two failure modes this crate
/// detects itself: a login exchange that did not yield a credential, and an
/// enumerated parameter rejected before any request is sent.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure or non-success HTTP status from the remote service
    ///
    /// Not retried and not translated. A stale session surfaces here as the
    /// authorization status the server responds with, not as a distinct
    /// local error kind.
    #[error("transport error: {0}")]
    Transport(#[from] RestError),

    /// The login exchange failed
    ///
    /// Either the remote rejected the credentials (non-success status on
    /// `POST /api/session`) or the session response body lacked the
    /// expected credential field.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// A caller-supplied enumerated parameter is outside its allowed set
    ///
    /// Raised before any network call is made.
    #[error("invalid {parameter} {value:?}: expected one of {allowed:?}")]
    Validation {
        parameter: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
}

/// Convenience result type for Userful API operations
pub type Result<T> = std::result::Result<T, ApiError>;
