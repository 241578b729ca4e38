//! Transport layer: HTTP delivery of encoded request bodies.
//!
//! The [`Transport`] trait abstracts the HTTP client so the call
//! pipeline can be exercised with fault-injecting stubs; the production
//! implementation is [`ReqwestTransport`]. Endpoint, proxy, TLS, and
//! timeout configuration are fixed at construction.

mod client;
mod error;

#[cfg(test)]
mod client_tests;

pub use client::ReqwestTransport;
pub use error::TransportError;

/// Trait for delivering one encoded request to the registrar endpoint.
pub trait Transport: Send + Sync {
    /// POSTs `body` with the given headers and returns the raw response
    /// body text.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when:
    /// - the connect or read deadline passes ([`TransportError::Timeout`])
    /// - the socket fails ([`TransportError::Connection`])
    /// - the response does not parse as HTTP ([`TransportError::BadStatusLine`])
    fn post(
        &self,
        body: String,
        headers: http::HeaderMap,
    ) -> impl std::future::Future<Output = Result<String, TransportError>> + Send;
}
