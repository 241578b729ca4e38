//! Error types for the transport layer.

use thiserror::Error;

/// Error type for a single HTTP exchange.
///
/// One variant per transport failure class the client distinguishes;
/// each wraps the underlying cause. None of these are retried.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Socket-level failure: connection refused, reset, DNS, TLS.
    #[error("connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Connect or read exceeded the configured deadline.
    #[error("request timed out: {0}")]
    Timeout(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server answered with something that does not parse as HTTP.
    #[error("malformed HTTP response: {0}")]
    BadStatusLine(#[source] Box<dyn std::error::Error + Send + Sync>),
}
