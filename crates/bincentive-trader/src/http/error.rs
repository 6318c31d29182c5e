/*
[INPUT]:  Error sources (HTTP transport, gateway statuses, key material)
[OUTPUT]: Structured error types for the entire crate
[POS]:    Error handling layer - unified error types
[UPDATE]: When adding new error sources or improving error messages
*/

use std::time::Duration;

use thiserror::Error;

/// Main error type for the Bincentive SDK.
///
/// Every failure surfaces immediately to the caller; the client never
/// retries and holds no partial state after a failed call.
#[derive(Error, Debug)]
pub enum TraderError {
    /// Login rejected by the member service
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// Gateway returned 450 with a business-rule rejection message
    #[error("API rejected request: {message}")]
    Api { message: String },

    /// Gateway returned 500
    #[error("API server error")]
    ApiServer,

    /// Transport-level connection failure
    #[error("connection failed: {0}")]
    Connection(#[source] reqwest::Error),

    /// Request exceeded the caller-specified or default timeout
    #[error("request timed out after {duration}s")]
    Timeout { duration: u64 },

    /// Any other non-200 status
    #[error("unexpected status {status}")]
    Unexpected { status: u16 },

    /// HTTP request failed before a status was produced
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Server-supplied public key material is unusable
    #[error("unusable public key: {0}")]
    Key(String),

    /// OpenPGP parsing or encryption failed
    #[error("encryption error: {0}")]
    Pgp(#[from] pgp::errors::Error),

    /// Response body did not match the expected envelope
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl TraderError {
    /// Map a transport failure to the taxonomy, keeping timeouts distinct
    /// from connection failures.
    pub(crate) fn transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            TraderError::Timeout {
                duration: timeout.as_secs(),
            }
        } else if err.is_connect() {
            TraderError::Connection(err)
        } else {
            TraderError::Http(err)
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self, TraderError::Authentication { .. })
    }

    /// Check if the failure happened below the API (no gateway verdict)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            TraderError::Connection(_) | TraderError::Timeout { .. } | TraderError::Http(_)
        )
    }
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, TraderError>;
