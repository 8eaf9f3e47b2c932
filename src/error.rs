//! Error types shared across the crate.
//!
//! Each enum maps to one failure domain: configuration, the durable
//! credential store, the upstream token endpoint, and credential acquisition
//! as seen by the request handlers. Handlers convert these into HTTP
//! responses at the boundary; nothing here panics.

use reqwest::StatusCode;
use thiserror::Error;

/// Startup configuration failures. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Failures of the durable credential store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("credential store unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    #[error("credential record malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failures of a token-endpoint exchange (code or refresh grant).
#[derive(Debug, Error)]
pub enum TokenError {
    /// The request never produced a usable response: connection failure,
    /// timeout, or an unreadable body.
    #[error("token endpoint unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The token endpoint answered with a non-success status.
    #[error("token endpoint returned {status}: {body}")]
    Rejected { status: StatusCode, body: String },

    /// The response was 2xx but did not carry an access token.
    #[error("malformed token response: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// Failures to produce a usable access credential for a resource call.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Neither an access credential nor a refresh credential is available;
    /// the user has to authorize via /login first.
    #[error("no credential available")]
    NoCredential,

    #[error("token refresh failed: {0}")]
    Refresh(#[source] TokenError),
}
