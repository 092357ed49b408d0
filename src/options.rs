//! Configuration options for block filtering.
//!
//! The `Options` struct carries the thresholds that drive the duplicate
//! detector and the language gate. Loading values from a file or CLI is
//! the host's concern; this crate only consumes the struct.

use serde::{Deserialize, Serialize};

/// Configuration options for block filtering.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_dedup::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     max_repetitions: 0,
///     target_language: Some("en".to_string()),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Minimum normalized text length (characters) for duplicate checking.
    ///
    /// Blocks at or below this length are always classified as novel,
    /// though their observation count is still recorded. Keeps short
    /// legitimate repeats (dates, bylines) from being flagged.
    ///
    /// Default: `100`
    pub min_dupl_check_size: usize,

    /// Number of stored repetitions strictly above which a block is a
    /// duplicate.
    ///
    /// With the default of `2`, the first three occurrences of a text are
    /// kept and the fourth occurrence onward is dropped.
    ///
    /// Default: `2`
    pub max_repetitions: usize,

    /// Maximum size of the deduplication cache (number of entries).
    ///
    /// Must be greater than zero; `DuplicateDetector::new` and
    /// `BlockFilter::new` fail otherwise.
    ///
    /// Default: `1000`
    pub cache_size: usize,

    /// Filter content by expected language (ISO 639-1 code).
    ///
    /// When set and a language identifier is available, blocks whose
    /// detected language differs are dropped. When `None`, the language
    /// gate is a pass-through.
    ///
    /// Default: `None`
    pub target_language: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_dupl_check_size: 100,
            max_repetitions: 2,
            cache_size: 1000,
            target_language: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_thresholds() {
        let opts = Options::default();

        assert_eq!(opts.min_dupl_check_size, 100);
        assert_eq!(opts.max_repetitions, 2);
        assert_eq!(opts.cache_size, 1000);
        assert!(opts.target_language.is_none());
    }

    #[test]
    fn test_custom_thresholds() {
        let opts = Options {
            min_dupl_check_size: 10,
            max_repetitions: 0,
            cache_size: 64,
            ..Options::default()
        };

        assert_eq!(opts.min_dupl_check_size, 10);
        assert_eq!(opts.max_repetitions, 0);
        assert_eq!(opts.cache_size, 64);
    }
}
