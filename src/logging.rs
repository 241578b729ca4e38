//! Wire logging: the sink collaborator and log-line formatting.
//!
//! The client logs one line per request and per response. Lines are
//! pre-formatted here and handed to a [`LogSink`], a write-only
//! collaborator the caller can replace; the default emits through
//! `tracing`.

use crate::envelope::Metadata;
use std::fmt;

/// Service tag prefixed to every wire log line.
pub const SERVICE_TAG: &str = "XCP";

/// Which side of the exchange a log line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    /// An outgoing request body.
    Request,
    /// A received response body.
    Response,
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request => f.write_str("Request"),
            Self::Response => f.write_str("Response"),
        }
    }
}

/// Write-only sink accepting pre-formatted wire log lines.
///
/// Implementations must be safe to call from concurrent in-flight calls.
pub trait LogSink: Send + Sync {
    /// Records one formatted log line.
    fn log(&self, line: &str);
}

/// Default sink emitting through `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, line: &str) {
        tracing::info!(target: "xcp_client::wire", "{line}");
    }
}

/// Formats one wire log line.
///
/// Shape: `[XCP] <Request|Response> XML[ for <OBJECT> <ACTION>]` followed
/// by the payload. With compaction enabled, interior line breaks and
/// leading whitespace are stripped from the payload and the whole line
/// is emitted as a single line.
#[must_use]
pub(crate) fn wire_line(kind: LogKind, meta: &Metadata, payload: &str, compact: bool) -> String {
    let mut header = format!("[{SERVICE_TAG}] {kind} XML");
    if let (Some(object), Some(action)) = (&meta.object, &meta.action) {
        header.push_str(&format!(" for {object} {action}"));
    }
    if compact {
        format!("{header} {}", compact_payload(payload))
    } else {
        format!("{header}\n{payload}")
    }
}

fn compact_payload(payload: &str) -> String {
    payload.lines().map(str::trim_start).collect()
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
