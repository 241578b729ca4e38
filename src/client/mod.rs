//! The client orchestrator.
//!
//! Composes the envelope, codec, signer, redactor, log sink, and
//! transport into one call pipeline:
//!
//! ```text
//! merge → encode → log request → sign → POST → log response → decode
//! ```
//!
//! A [`Client`] is built once and reused; it holds no per-call mutable
//! state, so calls are independent and safe to issue from concurrent
//! tasks. No lock is held across the network await, there are no
//! retries, and there is no cancellation beyond the transport's own
//! timeouts.

mod error;
mod response;


pub use error::Error;
pub use response::Response;

use crate::codec::{self, Codec};
use crate::config::{ClientConfig, ConfigError};
use crate::envelope::{self, Envelope, Metadata};
use crate::logging::{self, LogKind, LogSink, TracingSink};
use crate::redact::Redactor;
use crate::signature::sign;
use crate::transport::{ReqwestTransport, Transport};
use http::HeaderValue;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderName};
use std::sync::Arc;

/// Header carrying the registrar account username.
const USERNAME_HEADER: HeaderName = HeaderName::from_static("x-username");

/// Header carrying the keyed body signature.
const SIGNATURE_HEADER: HeaderName = HeaderName::from_static("x-signature");

/// A registrar client over a fixed configuration.
///
/// Generic over the transport so the pipeline can be exercised with
/// fault-injecting stubs; production code uses the default
/// [`ReqwestTransport`].
pub struct Client<T = ReqwestTransport> {
    transport: T,
    codec: Arc<dyn Codec>,
    redactor: Redactor,
    logger: Arc<dyn LogSink>,
    username_header: HeaderValue,
    key: String,
    compact_logs: bool,
}

impl<T> std::fmt::Debug for Client<T> {
    // Manual impl: the signing key must never reach logs, and the codec
    // and sink handles are not Debug.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("username", &self.username_header)
            .field("compact_logs", &self.compact_logs)
            .finish_non_exhaustive()
    }
}

impl Client<ReqwestTransport> {
    /// Builds a client with the production HTTP transport.
    ///
    /// # Errors
    ///
    /// Fails fast with [`Error::Configuration`] on missing credentials,
    /// an unusable endpoint or proxy, or an unknown codec name, before
    /// any call is attempted.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        config.validate()?;
        let transport = ReqwestTransport::from_config(&config)?;
        Self::with_transport(transport, config)
    }
}

impl<T: Transport> Client<T> {
    /// Builds a client over a caller-supplied transport.
    ///
    /// # Errors
    ///
    /// Same configuration checks as [`Client::new`], minus the HTTP
    /// stack initialization.
    pub fn with_transport(transport: T, config: ClientConfig) -> Result<Self, Error> {
        config.validate()?;
        let codec = codec::codec_by_name(&config.codec)?;
        let username_header = HeaderValue::from_str(&config.username).map_err(|e| {
            ConfigError::InvalidHeaderValue {
                name: "X-Username",
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            transport,
            codec,
            redactor: Redactor::new(config.sanitize_logs),
            logger: config
                .logger
                .unwrap_or_else(|| Arc::new(TracingSink) as Arc<dyn LogSink>),
            username_header,
            key: config.key,
            compact_logs: config.compact_logs,
        })
    }

    /// Performs one signed registrar call.
    ///
    /// `fields` are merged over the protocol base (caller wins on
    /// collision), encoded, logged, signed, and POSTed; the response is
    /// logged before decoding so a partial exchange still leaves a
    /// trace.
    ///
    /// # Errors
    ///
    /// Returns one variant of the closed [`Error`] taxonomy. A single
    /// failed attempt is a single reported failure; nothing is retried.
    pub async fn call(&self, fields: Envelope) -> Result<Response, Error> {
        let merged = envelope::merge_over_base(fields);
        let meta = Metadata::from_envelope(&merged);

        let request_xml = self.codec.encode(&merged)?;
        self.log(LogKind::Request, &request_xml, &meta);

        let headers = self.headers(&request_xml)?;
        let response_xml = self
            .transport
            .post(request_xml.clone(), headers)
            .await?;
        self.log(LogKind::Response, &response_xml, &meta);

        let body = self.codec.decode(&response_xml)?;
        Ok(Response::new(body, request_xml, response_xml))
    }

    /// Required wire headers, including the signature over the exact
    /// encoded body.
    fn headers(&self, body: &str) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/xml"));
        headers.insert(USERNAME_HEADER, self.username_header.clone());
        let signature = HeaderValue::from_str(&sign(body, &self.key)).map_err(|e| {
            ConfigError::InvalidHeaderValue {
                name: "X-Signature",
                reason: e.to_string(),
            }
        })?;
        headers.insert(SIGNATURE_HEADER, signature);
        Ok(headers)
    }

    fn log(&self, kind: LogKind, payload: &str, meta: &Metadata) {
        let redacted = self.redactor.redact(kind, payload, meta);
        self.logger
            .log(&logging::wire_line(kind, meta, &redacted, self.compact_logs));
    }
}
