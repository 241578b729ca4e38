//! Keyed request signatures.

use md5::{Digest, Md5};

/// Computes the registrar's keyed signature over a raw request body.
///
/// The scheme is a double MD5 with the shared key appended at each pass,
/// the inner digest rendered as lowercase hex before the outer pass:
///
/// ```text
/// md5_hex(md5_hex(body + key) + key)
/// ```
///
/// This must match the registrar bit-exactly; the server recomputes it
/// from the received body and rejects mismatches. Pure function, no
/// error conditions.
#[must_use]
pub fn sign(body: &str, key: &str) -> String {
    let inner = hex::encode(Md5::digest(format!("{body}{key}")));
    hex::encode(Md5::digest(format!("{inner}{key}")))
}

#[cfg(test)]
#[path = "signature_tests.rs"]
mod tests;
