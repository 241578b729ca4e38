//! Wire codecs: pluggable encode/decode between envelopes and wire text.
//!
//! The [`Codec`] trait is the seam: the client holds one codec instance,
//! resolved once at construction by name through the process-wide
//! registry. The registry exists so every client in a process can speak
//! the same wire format by default; register custom codecs at startup,
//! before clients are constructed. Reads of the registry are atomic
//! under concurrent writers, but swapping codecs while calls are in
//! flight is a caller responsibility.

mod error;
mod xml;


pub use error::CodecError;
pub use xml::XmlCodec;

use crate::config::ConfigError;
use crate::envelope::Envelope;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

/// Name of the codec registered by default.
pub const DEFAULT_CODEC: &str = "xml";

/// A wire codec: encodes an envelope to wire text and decodes wire text
/// back to an envelope.
pub trait Codec: Send + Sync {
    /// Serializes an envelope to wire text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encoding`] on unserializable input.
    fn encode(&self, envelope: &Envelope) -> Result<String, CodecError>;

    /// Parses wire text back into an envelope.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Decoding`] on malformed input.
    fn decode(&self, text: &str) -> Result<Envelope, CodecError>;
}

static REGISTRY: LazyLock<RwLock<HashMap<String, Arc<dyn Codec>>>> = LazyLock::new(|| {
    let mut codecs: HashMap<String, Arc<dyn Codec>> = HashMap::new();
    codecs.insert(DEFAULT_CODEC.to_owned(), Arc::new(XmlCodec::new()));
    RwLock::new(codecs)
});

/// Registers a codec under a name, replacing any previous registration.
pub fn register_codec(name: impl Into<String>, codec: Arc<dyn Codec>) {
    REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(name.into(), codec);
}

/// Resolves a codec by name.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownCodec`] when nothing is registered
/// under `name`. Resolution happens at client construction, so a bad
/// name fails fast rather than on the first call.
pub fn codec_by_name(name: &str) -> Result<Arc<dyn Codec>, ConfigError> {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
        .cloned()
        .ok_or_else(|| ConfigError::UnknownCodec(name.to_owned()))
}
