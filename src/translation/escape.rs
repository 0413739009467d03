//! Catalog escape normalization
//!
//! Catalog sources spell the IRC bold control as the two characters `\2`.
//! Language table keys and values are stored with it rewritten to `0x02`,
//! after being cut to the configured byte bound.

use crate::bounded::truncate_to_boundary;

/// Escaped form of the bold control as written in catalogs
pub const ESCAPED_BOLD: &str = "\\2";

/// IRC bold formatting control
pub const BOLD: &str = "\u{2}";

/// Result of [`normalize_escapes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    /// Input was longer than the bound and was cut before rewriting
    pub truncated: bool,
}

/// Truncates `input` to `max_len` bytes, then rewrites every `\2` to `0x02`.
///
/// A `\2` split by the cut is left as a lone backslash.
#[must_use]
pub fn normalize_escapes(input: &str, max_len: usize) -> Normalized {
    let (bounded, truncated) = truncate_to_boundary(input, max_len);
    Normalized { text: bounded.replace(ESCAPED_BOLD, BOLD), truncated }
}
