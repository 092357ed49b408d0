//! Text normalization and content fingerprinting.
//!
//! `normalize` produces the comparison key used by the deduplication cache;
//! `content_fingerprint` produces a compact digest of a block's significant
//! tokens for identity comparison across documents. The two are independent:
//! the duplicate detector never stores fingerprints in its cache.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use sha1::{Digest, Sha1};

use crate::patterns::LONG_WORD;

/// Normalizes a text block into its deduplication cache key.
///
/// Collapses every run of Unicode whitespace to a single space and trims the
/// ends, so fragment boundaries and indentation do not affect identity.
///
/// # Example
///
/// ```rust
/// use rs_dedup::fingerprint::normalize;
///
/// assert_eq!(normalize("  some\t broken \n text "), "some broken text");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Calculates a hash value for the meaningful bits of the content.
///
/// Lowercases the text, keeps only maximal word-character runs of length 5
/// or more joined by single spaces, and returns the base64-encoded SHA-1
/// digest of that token string. Short function words, punctuation and
/// whitespace variation therefore do not affect the fingerprint, while any
/// change to the significant tokens does.
///
/// Deterministic within and across process runs. Text without a single
/// qualifying token hashes the empty string.
///
/// # Example
///
/// ```rust
/// use rs_dedup::fingerprint::content_fingerprint;
///
/// let a = content_fingerprint("Hello, World! Testing text.");
/// let b = content_fingerprint("hello WORLD - testing text");
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn content_fingerprint(text: &str) -> String {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = LONG_WORD.find_iter(&lowered).map(|m| m.as_str()).collect();
    let digest = Sha1::digest(tokens.join(" ").as_bytes());
    BASE64.encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize("one  two\tthree\n four"), "one two three four");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("plain"), "plain");
    }

    #[test]
    fn fingerprint_is_deterministic() {
        let text = "Hello World! Testing quick";
        assert_eq!(content_fingerprint(text), content_fingerprint(text));
    }

    #[test]
    fn fingerprint_ignores_case_punctuation_and_short_words() {
        let a = content_fingerprint("Hello World! Testing quick");
        let b = content_fingerprint("hello... world,   testing (quick)");
        let c = content_fingerprint("hello a world is testing of quick");
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn fingerprint_changes_with_content() {
        let a = content_fingerprint("Hello World! Testing quick");
        let b = content_fingerprint("Hello World! Testing slowly");
        assert_ne!(a, b);
    }

    #[test]
    fn fingerprint_of_insignificant_text_is_empty_hash() {
        // No word-character run reaches length 5, so the empty string is
        // hashed: sha1("") in base64.
        let empty = "2jmj7l5rSw0yVb/vlWAYkK/YBwk=";
        assert_eq!(content_fingerprint(""), empty);
        assert_eq!(content_fingerprint("a the of, to!"), empty);
    }

    #[test]
    fn fingerprint_is_fixed_length_base64() {
        // 20-byte digest -> 28 base64 chars including padding.
        let fp = content_fingerprint("significant enough content words");
        assert_eq!(fp.len(), 28);
        assert!(fp.ends_with('='));
    }
}
