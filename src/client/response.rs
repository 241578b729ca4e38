//! The response wrapper retaining parsed and raw forms.

use crate::envelope::{Envelope, Value};

/// A completed registrar exchange.
///
/// Immutable triple of the decoded body, the raw request XML that was
/// signed and sent, and the raw response XML as received. All three are
/// retained regardless of codec; the accessors are best-effort lookups
/// into the decoded body, whose exact field set belongs to the wire
/// protocol rather than this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    body: Envelope,
    request_xml: String,
    response_xml: String,
}

impl Response {
    pub(crate) fn new(body: Envelope, request_xml: String, response_xml: String) -> Self {
        Self {
            body,
            request_xml,
            response_xml,
        }
    }

    /// The decoded response body.
    #[must_use]
    pub const fn body(&self) -> &Envelope {
        &self.body
    }

    /// The raw request XML exactly as signed and transmitted.
    #[must_use]
    pub fn request_xml(&self) -> &str {
        &self.request_xml
    }

    /// The raw response XML exactly as received.
    #[must_use]
    pub fn response_xml(&self) -> &str {
        &self.response_xml
    }

    /// True when the registrar acknowledged the operation
    /// (`is_success` field equals `"1"`).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.text_field("is_success") == Some("1")
    }

    /// The registrar's numeric response code, when present.
    #[must_use]
    pub fn response_code(&self) -> Option<&str> {
        self.text_field("response_code")
    }

    /// The registrar's human-readable reason, when present.
    #[must_use]
    pub fn response_text(&self) -> Option<&str> {
        self.text_field("response_text")
    }

    fn text_field(&self, key: &str) -> Option<&str> {
        self.body.get(key).and_then(Value::as_text)
    }
}
