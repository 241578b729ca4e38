//! The umbrella error for client operations.

use crate::codec::CodecError;
use crate::config::ConfigError;
use crate::transport::TransportError;
use thiserror::Error;

/// Error type for a registrar call.
///
/// One umbrella over the closed failure taxonomy, so callers can match
/// broadly or narrowly. Each network variant wraps the underlying cause;
/// nothing is retried and nothing is swallowed.
#[derive(Debug, Error)]
pub enum Error {
    /// The server answered with a structurally invalid HTTP response.
    ///
    /// The registrar closes unauthorized origins with a non-HTTP reply,
    /// so this usually means the caller's IP address is not whitelisted
    /// for API access.
    #[error(
        "malformed HTTP response from registrar (check that your IP address \
         is whitelisted for API access): {0}"
    )]
    BadResponse(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Connect or read exceeded the configured deadline.
    #[error("request timed out: {0}")]
    Timeout(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Socket-level failure: connection refused, reset, DNS, TLS.
    #[error("connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The request envelope could not be serialized.
    #[error(transparent)]
    Encoding(CodecError),

    /// The registrar response could not be parsed. The raw response was
    /// logged before this error was raised.
    #[error(transparent)]
    Decoding(CodecError),

    /// Invalid or missing configuration, including unknown codec names.
    #[error(transparent)]
    Configuration(#[from] ConfigError),
}

impl From<TransportError> for Error {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Timeout(cause) => Self::Timeout(cause),
            TransportError::Connection(cause) => Self::Connection(cause),
            TransportError::BadStatusLine(cause) => Self::BadResponse(cause),
        }
    }
}

impl From<CodecError> for Error {
    fn from(error: CodecError) -> Self {
        match error {
            CodecError::Encoding(_) => Self::Encoding(error),
            CodecError::Decoding(_) => Self::Decoding(error),
        }
    }
}
