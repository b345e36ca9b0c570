//! Canonical request construction for the SNWS2 scheme.
//!
//! The server reconstructs this text byte-for-byte from the literal request
//! it receives and compares signatures, so ordering, escaping and line layout
//! here are a wire contract, not a local convention.

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Write;

use percent_encoding::utf8_percent_encode;

use crate::constants::QUERY_ENCODE_SET;

/// The canonical form of a request, ready to be hashed into the signature
/// payload.
///
/// Rendered via `Display` as: method line, path line, query line (possibly
/// empty), one `name:value` line per signed header, the `;`-joined signed
/// header name list, then the hex content digest.
pub(crate) struct CanonicalRequest {
    pub method: http::Method,
    pub path: String,
    pub query: String,
    /// Signed headers as `(lower-case name, canonical value)`, sorted by name.
    pub headers: Vec<(String, String)>,
    pub content_sha256: String,
}

impl CanonicalRequest {
    pub fn signed_header_names(&self) -> Vec<&str> {
        self.headers.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl Display for CanonicalRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.path)?;
        writeln!(f, "{}", self.query)?;
        for (name, value) in self.headers.iter() {
            writeln!(f, "{name}:{value}")?;
        }
        writeln!(f, "{}", self.signed_header_names().join(";"))?;
        write!(f, "{}", self.content_sha256)
    }
}

/// Build the canonical query string for a set of parameters.
///
/// Keys are sorted lexicographically by their raw (non-encoded) form; a key
/// with multiple values contributes one `key=value` pair per value in
/// insertion order. Both sides are percent-encoded with
/// [`QUERY_ENCODE_SET`]. Returns the empty string when there are no
/// parameters.
pub(crate) fn canonical_query_string(params: &[(String, String)]) -> String {
    let mut keys: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).collect();
    keys.sort_unstable();
    keys.dedup();

    let mut s = String::with_capacity(16);
    for key in keys {
        for (k, v) in params.iter().filter(|(k, _)| k == key) {
            if !s.is_empty() {
                s.push('&');
            }
            write!(
                s,
                "{}={}",
                utf8_percent_encode(k, &QUERY_ENCODE_SET),
                utf8_percent_encode(v, &QUERY_ENCODE_SET)
            )
            .expect("writing to string must succeed");
        }
    }

    s
}
