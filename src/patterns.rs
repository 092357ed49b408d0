//! Compiled regex patterns for text filtering and fingerprinting.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Boilerplate Label Patterns
// =============================================================================

/// Matches lines ending in a short social/share/print boilerplate label.
///
/// Case-insensitive and anchored at line end only, so trailing labels with
/// lead-in text ("Share on Facebook", "» Print") match as well. Applied per
/// line by `textfilter::is_unwanted`.
pub static FILTER_LABELS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\W*(Drucken|E-?Mail|Facebook|Flipboard|Google|Instagram|Linkedin|Mail|PDF|Pinterest|Pocket|Print|Reddit|Twitter|Whatsapp|Xing)$",
    )
    .expect("FILTER_LABELS regex")
});

// =============================================================================
// Fingerprint Tokenization Patterns
// =============================================================================

/// Matches maximal runs of word characters with length >= 5.
///
/// These are the "significant tokens" of a content block; short function
/// words and all punctuation/whitespace are discarded before hashing.
pub static LONG_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w{5,}").expect("LONG_WORD regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_labels_matches_bare_and_prefixed_labels() {
        assert!(FILTER_LABELS.is_match("Facebook"));
        assert!(FILTER_LABELS.is_match("facebook"));
        assert!(FILTER_LABELS.is_match("Share on Facebook"));
        assert!(FILTER_LABELS.is_match("E-Mail"));
        assert!(FILTER_LABELS.is_match("Email"));
        assert!(!FILTER_LABELS.is_match("Facebook changed its privacy policy"));
        assert!(!FILTER_LABELS.is_match("A paragraph of article text"));
    }

    #[test]
    fn long_word_extracts_significant_tokens() {
        let tokens: Vec<&str> = LONG_WORD
            .find_iter("the quick brown fox jumps over it")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(tokens, vec!["quick", "brown", "jumps"]);
    }
}
