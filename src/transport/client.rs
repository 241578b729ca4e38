//! Production transport implementation using reqwest.

use super::{Transport, TransportError};
use crate::config::{ClientConfig, ConfigError};

/// HTTP transport backed by a `reqwest::Client`.
///
/// Built once from the client configuration: independent connect and
/// read timeouts (platform defaults when unset), an optional forward
/// proxy with basic-auth credentials taken from the proxy URL, and TLS
/// certificate verification that is ON unless explicitly disabled.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
    endpoint: url::Url,
}

impl ReqwestTransport {
    /// Builds the transport from client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProxy`] when the proxy URL is
    /// rejected by the HTTP stack, or [`ConfigError::TransportInit`]
    /// when the underlying client cannot be constructed.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.read_timeout {
            builder = builder.read_timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if !config.verify_tls {
            // Deliberate opt-out for registrar test environments with
            // self-signed certificates. Verification stays on by default.
            builder = builder.danger_accept_invalid_certs(true);
        }
        if let Some(proxy_url) = &config.proxy {
            builder = builder.proxy(build_proxy(proxy_url)?);
        }
        let inner = builder
            .build()
            .map_err(|e| ConfigError::TransportInit(Box::new(e)))?;
        Ok(Self {
            inner,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The endpoint this transport POSTs to. The `url` crate normalizes
    /// an endpoint without a path to path `/`.
    #[must_use]
    pub const fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }
}

fn build_proxy(proxy_url: &url::Url) -> Result<reqwest::Proxy, ConfigError> {
    let mut proxy =
        reqwest::Proxy::all(proxy_url.as_str()).map_err(|e| ConfigError::InvalidProxy {
            url: proxy_url.to_string(),
            reason: e.to_string(),
        })?;
    if !proxy_url.username().is_empty() {
        proxy = proxy.basic_auth(proxy_url.username(), proxy_url.password().unwrap_or_default());
    }
    Ok(proxy)
}

impl Transport for ReqwestTransport {
    async fn post(
        &self,
        body: String,
        headers: http::HeaderMap,
    ) -> Result<String, TransportError> {
        let response = self
            .inner
            .post(self.endpoint.as_str())
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(classify)?;
        response.text().await.map_err(classify)
    }
}

/// Maps a reqwest failure onto the transport error taxonomy.
fn classify(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        return TransportError::Timeout(Box::new(error));
    }
    if is_parse_failure(&error) {
        return TransportError::BadStatusLine(Box::new(error));
    }
    TransportError::Connection(Box::new(error))
}

/// A response that does not parse as HTTP surfaces as a hyper parse
/// error somewhere down the source chain.
fn is_parse_failure(error: &reqwest::Error) -> bool {
    let mut source = std::error::Error::source(error);
    while let Some(inner) = source {
        if let Some(hyper_error) = inner.downcast_ref::<hyper::Error>() {
            return hyper_error.is_parse();
        }
        source = inner.source();
    }
    false
}
