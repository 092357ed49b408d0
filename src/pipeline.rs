//! Per-block filtering pipeline.
//!
//! Chains the three checks in cheapest-rejection-first order: structural
//! text filter, then duplicate detector, then language gate. A block that
//! survives all three is accepted into the output document.

use crate::dedup::DuplicateDetector;
use crate::fingerprint::normalize;
use crate::language::{language_filter, DocumentMeta, LanguageIdentifier};
use crate::options::Options;
use crate::textfilter::{has_usable_text, is_unwanted, TextBlock};
use crate::Result;

/// Why a block was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// No usable text, or matched a boilerplate label.
    Structural,
    /// Seen more than `max_repetitions` times recently.
    Duplicate,
    /// Detected language differs from the configured target.
    LanguageMismatch,
}

/// Classification outcome for one text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockDecision {
    /// The block is genuine content.
    Keep,
    /// The block should be excluded, with the diagnostic reason.
    Drop(DropReason),
}

impl BlockDecision {
    /// Returns true for `Keep`.
    #[must_use]
    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }
}

/// Running counters over all evaluated blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Blocks accepted.
    pub kept: usize,
    /// Blocks dropped by the structural filter.
    pub dropped_structural: usize,
    /// Blocks dropped as duplicates.
    pub dropped_duplicate: usize,
    /// Blocks dropped by the language gate.
    pub dropped_language: usize,
}

impl FilterStats {
    /// Total number of blocks evaluated.
    #[must_use]
    pub fn total(&self) -> usize {
        self.kept + self.dropped_structural + self.dropped_duplicate + self.dropped_language
    }

    /// Fraction of evaluated blocks dropped as duplicates.
    ///
    /// Hosts compare this against their duplicate-ratio ceiling to reject
    /// documents that are mostly repeated content. Zero before any block
    /// has been evaluated.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn duplicate_ratio(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.dropped_duplicate as f64 / total as f64
    }
}

/// Streaming per-block filter combining all three checks.
///
/// Holds the duplicate detector's cache, so one `BlockFilter` covers one
/// stream of blocks (typically one document, or one pipeline when repeats
/// should be tracked across documents).
///
/// # Example
///
/// ```rust
/// use rs_dedup::{BlockFilter, DocumentMeta, LanguageIdentifier, Options, TextBlock};
///
/// let mut filter = BlockFilter::new(
///     &Options::default(),
///     LanguageIdentifier::Unavailable,
///     DocumentMeta::default(),
/// )?;
///
/// let block = TextBlock::with_text("A paragraph of genuine article content.");
/// assert!(filter.evaluate(&block, None).is_keep());
///
/// let share = TextBlock::with_text("Share on Facebook");
/// assert!(!filter.evaluate(&share, None).is_keep());
/// # Ok::<(), rs_dedup::Error>(())
/// ```
#[derive(Debug)]
pub struct BlockFilter {
    detector: DuplicateDetector,
    identifier: LanguageIdentifier,
    target_language: Option<String>,
    meta: DocumentMeta,
    stats: FilterStats,
}

impl BlockFilter {
    /// Creates a filter from configuration, a language capability and the
    /// document identity used to annotate rejection diagnostics.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCacheCapacity` if `options.cache_size` is zero.
    pub fn new(
        options: &Options,
        identifier: LanguageIdentifier,
        meta: DocumentMeta,
    ) -> Result<Self> {
        Ok(Self {
            detector: DuplicateDetector::new(options)?,
            identifier,
            target_language: options.target_language.clone(),
            meta,
            stats: FilterStats::default(),
        })
    }

    /// Classifies one text block.
    ///
    /// `comment_text` is an optional secondary sample for the language gate
    /// (the longer of the two texts is classified). Structurally dropped
    /// blocks never reach the duplicate detector, so they do not pollute
    /// the cache.
    pub fn evaluate(&mut self, block: &TextBlock, comment_text: Option<&str>) -> BlockDecision {
        if !has_usable_text(block) || is_unwanted(block) {
            self.stats.dropped_structural += 1;
            return BlockDecision::Drop(DropReason::Structural);
        }

        // has_usable_text guarantees the effective text is present.
        let text = block.effective_text().unwrap_or_default();

        if self.detector.is_duplicate(text) {
            self.stats.dropped_duplicate += 1;
            return BlockDecision::Drop(DropReason::Duplicate);
        }

        let rejected = language_filter(
            &normalize(text),
            comment_text.unwrap_or_default(),
            self.target_language.as_deref(),
            &self.meta,
            &self.identifier,
        );
        if rejected {
            self.stats.dropped_language += 1;
            return BlockDecision::Drop(DropReason::LanguageMismatch);
        }

        self.stats.kept += 1;
        BlockDecision::Keep
    }

    /// Counters accumulated since construction.
    #[must_use]
    pub fn stats(&self) -> &FilterStats {
        &self.stats
    }

    /// Read access to the underlying duplicate detector.
    #[must_use]
    pub fn detector(&self) -> &DuplicateDetector {
        &self.detector
    }
}
