//! Structural text filtering.
//!
//! Pure predicates over a single text block: does it carry any usable text
//! at all, and does it consist of known share/print/social boilerplate
//! labels. No shared state, no side effects.

use crate::patterns::FILTER_LABELS;

/// A text block extracted from a document, in the text/tail model.
///
/// `text` is the block's own direct text; `tail` is text trailing the block
/// inside its parent (the lxml-style split used by HTML extractors). Blocks
/// whose direct text was consumed elsewhere often carry only a tail.
#[derive(Debug, Clone, Default)]
pub struct TextBlock {
    /// The block's own direct text.
    pub text: Option<String>,
    /// Text trailing the block inside its parent.
    pub tail: Option<String>,
}

impl TextBlock {
    /// Creates a block with direct text and no tail.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            tail: None,
        }
    }

    /// Creates a block carrying only trailing text.
    #[must_use]
    pub fn with_tail(tail: impl Into<String>) -> Self {
        Self {
            text: None,
            tail: Some(tail.into()),
        }
    }

    /// The text this block effectively contributes.
    ///
    /// The direct text when present, otherwise the tail.
    #[must_use]
    pub fn effective_text(&self) -> Option<&str> {
        match (&self.text, &self.tail) {
            (None, Some(tail)) => Some(tail.as_str()),
            (text, _) => text.as_deref(),
        }
    }
}

/// Determines whether a block carries any usable text.
///
/// False when the effective text is absent, empty, or composed solely of
/// whitespace and control characters. Absence of usable text is signaled
/// separately from boilerplate rejection; the pipeline treats both as
/// structural drops.
#[must_use]
pub fn has_usable_text(block: &TextBlock) -> bool {
    match block.effective_text() {
        Some(text) => text_chars_test(text),
        None => false,
    }
}

/// Determines if a string contains anything besides spaces and control characters.
#[must_use]
pub fn text_chars_test(text: &str) -> bool {
    !text.is_empty() && !text.chars().all(|c| c.is_whitespace() || c.is_control())
}

/// Filters out unwanted boilerplate text.
///
/// True when any line of the block's effective text ends with one of the
/// known share/print/social labels ("Facebook", "Print", "E-Mail", ...),
/// matched case-insensitively with arbitrary lead-in, so "Share on
/// Facebook" is caught as well. A block without usable text is not rejected
/// by this predicate; see `has_usable_text`.
#[must_use]
pub fn is_unwanted(block: &TextBlock) -> bool {
    let Some(text) = block.effective_text() else {
        return false;
    };
    if !text_chars_test(text) {
        return false;
    }

    text.lines().any(|line| FILTER_LABELS.is_match(line))
}
