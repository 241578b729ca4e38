//! XCP registrar client.
//!
//! A client for the XCP domain-registrar XML protocol: builds a signed
//! request envelope, delivers it over HTTP(S) (optionally through a
//! forward proxy), parses the XML response, and reports typed failures
//! for transport and protocol errors. Logged payloads pass through
//! redaction rules so sensitive fields never reach the log sink.

pub mod client;
pub mod codec;
pub mod config;
pub mod envelope;
pub mod logging;
pub mod redact;
pub mod signature;
pub mod transport;
