//! Client configuration.
//!
//! A [`ClientConfig`] is built once, validated at client construction,
//! and immutable for the client's lifetime. Only `username` and `key`
//! are required; everything else defaults: the live registrar endpoint,
//! platform timeouts, tracing-backed logging, sanitized logs, verified
//! TLS, and the XML codec.

mod error;

#[cfg(test)]
mod config_tests;

pub use error::ConfigError;

use crate::codec::DEFAULT_CODEC;
use crate::logging::LogSink;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Default registrar endpoint (the live XCP service).
pub const DEFAULT_ENDPOINT: &str = "https://rr-n1-tor.opensrs.net:55443/";

/// Configuration for a [`crate::client::Client`].
#[derive(Clone)]
pub struct ClientConfig {
    /// Registrar endpoint URL. Scheme, host, port, and path are all
    /// taken from here; an empty path normalizes to `/`.
    pub endpoint: Url,
    /// Account username, sent as the `X-Username` header.
    pub username: String,
    /// Account password. Retained for registrar account parity; the
    /// core transport never sends it, and it is not the signing key.
    pub password: Option<String>,
    /// Shared secret used to sign request bodies. Never transmitted
    /// and never logged.
    pub key: String,
    /// Read deadline. Platform default when unset.
    pub read_timeout: Option<Duration>,
    /// Connect deadline. Platform default when unset.
    pub connect_timeout: Option<Duration>,
    /// Wire log sink. Defaults to tracing when unset.
    pub logger: Option<Arc<dyn LogSink>>,
    /// Strip interior line breaks and leading whitespace from logged
    /// payloads.
    pub compact_logs: bool,
    /// Apply redaction rules to logged payloads. On by default.
    pub sanitize_logs: bool,
    /// Optional forward proxy; basic-auth credentials are taken from
    /// the URL's userinfo.
    pub proxy: Option<Url>,
    /// Verify the endpoint's TLS certificate. On by default; the
    /// registrar's test environments may need this off.
    pub verify_tls: bool,
    /// Name of the wire codec to resolve at construction.
    pub codec: String,
}

impl ClientConfig {
    /// Creates a configuration for the default registrar endpoint.
    #[must_use]
    pub fn new(username: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            username: username.into(),
            password: None,
            key: key.into(),
            read_timeout: None,
            connect_timeout: None,
            logger: None,
            compact_logs: false,
            sanitize_logs: true,
            proxy: None,
            verify_tls: true,
            codec: DEFAULT_CODEC.to_owned(),
        }
    }

    /// Sets the registrar endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Sets the account password (not used for signing).
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the read deadline.
    #[must_use]
    pub const fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Sets the connect deadline.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the wire log sink.
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn LogSink>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Enables or disables log compaction.
    #[must_use]
    pub const fn with_compact_logs(mut self, compact: bool) -> Self {
        self.compact_logs = compact;
        self
    }

    /// Enables or disables log redaction.
    #[must_use]
    pub const fn with_sanitize_logs(mut self, sanitize: bool) -> Self {
        self.sanitize_logs = sanitize;
        self
    }

    /// Routes requests through a forward proxy.
    #[must_use]
    pub fn with_proxy(mut self, proxy: Url) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Enables or disables TLS certificate verification.
    ///
    /// Disabling accepts any certificate the endpoint presents. Leave
    /// this on outside of registrar test environments.
    #[must_use]
    pub const fn with_verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    /// Selects the wire codec by registry name.
    #[must_use]
    pub fn with_codec(mut self, name: impl Into<String>) -> Self {
        self.codec = name.into();
        self
    }

    /// Checks required fields and the endpoint scheme.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] for an empty username or
    /// key, and [`ConfigError::InvalidEndpoint`] for a non-HTTP scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.username.is_empty() {
            return Err(ConfigError::MissingRequired {
                field: "username",
                hint: "provide the registrar account username",
            });
        }
        if self.key.is_empty() {
            return Err(ConfigError::MissingRequired {
                field: "key",
                hint: "provide the shared signing key issued by the registrar",
            });
        }
        match self.endpoint.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConfigError::InvalidEndpoint {
                url: self.endpoint.to_string(),
                reason: format!("unsupported scheme '{scheme}'"),
            }),
        }
    }
}

impl fmt::Debug for ClientConfig {
    // Manual impl: the signing key and password must never reach logs,
    // and the log sink is not Debug.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("key", &"<redacted>")
            .field("read_timeout", &self.read_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("compact_logs", &self.compact_logs)
            .field("sanitize_logs", &self.sanitize_logs)
            .field("proxy", &self.proxy.as_ref().map(Url::as_str))
            .field("verify_tls", &self.verify_tls)
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}
