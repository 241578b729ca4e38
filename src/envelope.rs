//! Request envelope values and protocol-base merging.
//!
//! An [`Envelope`] is the logical request structure before wire encoding:
//! a mapping of string keys to text, nested mappings, or ordered lists.
//! Every outgoing envelope carries the fixed protocol identifier, merged
//! in underneath the caller's fields.

use std::collections::BTreeMap;

/// Key of the fixed protocol-identifier field.
pub const PROTOCOL_KEY: &str = "protocol";

/// Value of the fixed protocol-identifier field.
pub const PROTOCOL_NAME: &str = "XCP";

/// The logical request/response structure before wire encoding.
pub type Envelope = BTreeMap<String, Value>;

/// A single envelope value: text, a nested mapping, or an ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A text leaf.
    Text(String),
    /// A nested key/value mapping.
    Assoc(BTreeMap<String, Value>),
    /// An ordered sequence of values.
    List(Vec<Value>),
}

impl Value {
    /// Returns the text content, if this value is a text leaf.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the nested mapping, if this value is an assoc.
    #[must_use]
    pub fn as_assoc(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Assoc(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the items, if this value is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Merges caller fields over the protocol base.
///
/// The base contains exactly one field, `protocol = "XCP"`. Caller fields
/// are merged over it, so a caller-supplied `protocol` wins on collision.
/// This merge order is a wire contract.
#[must_use]
pub fn merge_over_base(fields: Envelope) -> Envelope {
    let mut merged = Envelope::new();
    merged.insert(PROTOCOL_KEY.to_owned(), Value::from(PROTOCOL_NAME));
    merged.extend(fields);
    merged
}

/// Log-context metadata pulled from envelope fields.
///
/// Used only for log-line prefixes and redaction targeting; never sent
/// over the wire beyond what the caller put in the envelope itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// The registrar object the call addresses (e.g. `DOMAIN`).
    pub object: Option<String>,
    /// The action requested on the object (e.g. `SW_REGISTER`).
    pub action: Option<String>,
}

impl Metadata {
    /// Extracts object/action context from an envelope, when present.
    #[must_use]
    pub fn from_envelope(envelope: &Envelope) -> Self {
        let text = |key: &str| {
            envelope
                .get(key)
                .and_then(Value::as_text)
                .map(str::to_owned)
        };
        Self {
            object: text("object"),
            action: text("action"),
        }
    }
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
