//! Error types for client configuration.

use thiserror::Error;

/// Error type for configuration and setup failures.
///
/// All of these surface at client construction, never mid-call.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Endpoint URL uses an unsupported scheme or cannot be used.
    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint {
        /// The offending URL.
        url: String,
        /// Reason for invalidity.
        reason: String,
    },

    /// Proxy URL was rejected by the HTTP stack.
    #[error("invalid proxy URL '{url}': {reason}")]
    InvalidProxy {
        /// The offending URL.
        url: String,
        /// Reason for invalidity.
        reason: String,
    },

    /// No codec is registered under the requested name.
    #[error("no codec registered under name '{0}'")]
    UnknownCodec(String),

    /// Missing required field.
    #[error("missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field.
        field: &'static str,
        /// Hint for how to provide the value.
        hint: &'static str,
    },

    /// A configured value cannot be represented as an HTTP header.
    #[error("invalid header value for '{name}': {reason}")]
    InvalidHeaderValue {
        /// The header name.
        name: &'static str,
        /// Reason for invalidity.
        reason: String,
    },

    /// The underlying HTTP client failed to initialize.
    #[error("failed to initialize HTTP transport: {0}")]
    TransportInit(#[source] Box<dyn std::error::Error + Send + Sync>),
}
