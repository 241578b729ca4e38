//! Error types for wire codecs.

use thiserror::Error;

/// Error type for codec operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The envelope could not be serialized to the wire format.
    #[error("failed to encode envelope: {0}")]
    Encoding(String),

    /// The wire text could not be parsed back into an envelope.
    #[error("failed to decode document: {0}")]
    Decoding(String),
}
