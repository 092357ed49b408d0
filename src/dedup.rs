//! Duplicate text detection over a bounded frequency cache.
//!
//! Every observed block updates the cache, whether or not it is flagged, so
//! the detector works single-pass over a stream without re-scanning history.

use crate::fingerprint::normalize;
use crate::lru::FrequencyCache;
use crate::options::Options;
use crate::Result;

/// Classifies text blocks as repeats or novel content.
///
/// Owns its `FrequencyCache`, so hosts can run one detector per document or
/// share one across a pipeline. Each call is a read-modify-write on the
/// cache; see `FrequencyCache` for the concurrency constraints.
///
/// # Example
///
/// ```rust
/// use rs_dedup::{DuplicateDetector, Options};
///
/// let options = Options {
///     min_dupl_check_size: 10,
///     max_repetitions: 0,
///     ..Options::default()
/// };
/// let mut detector = DuplicateDetector::new(&options)?;
///
/// assert!(!detector.is_duplicate("Subscribe to our newsletter today"));
/// assert!(detector.is_duplicate("Subscribe to our newsletter today"));
/// # Ok::<(), rs_dedup::Error>(())
/// ```
#[derive(Debug)]
pub struct DuplicateDetector {
    cache: FrequencyCache,
    min_dupl_check_size: usize,
    max_repetitions: usize,
}

impl DuplicateDetector {
    /// Creates a detector with a cache sized by `options.cache_size`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCacheCapacity` if `options.cache_size` is zero.
    pub fn new(options: &Options) -> Result<Self> {
        Ok(Self {
            cache: FrequencyCache::with_capacity(options.cache_size)?,
            min_dupl_check_size: options.min_dupl_check_size,
            max_repetitions: options.max_repetitions,
        })
    }

    /// Checks a text block against recently seen content.
    ///
    /// The block's normalized text is the comparison key. Text at or below
    /// `min_dupl_check_size` characters is never flagged. Otherwise the
    /// block is a repeat once its previously stored count exceeds
    /// `max_repetitions`; the count keeps growing past the threshold, so
    /// chronic boilerplate stays flagged for as long as it recurs.
    ///
    /// Every call records an observation, flagged or not. Empty and
    /// whitespace-only input is tolerated: it normalizes to the empty key,
    /// which is always below the size floor.
    pub fn is_duplicate(&mut self, text: &str) -> bool {
        let key = normalize(text);

        if key.chars().count() > self.min_dupl_check_size {
            if let Some(count) = self.cache.get(&key) {
                if count > self.max_repetitions {
                    self.cache.put(&key, count + 1);
                    return true;
                }
            }
        }

        self.observe(&key);
        false
    }

    /// Returns how often the normalized form of `text` has been observed.
    ///
    /// Zero for text that has aged out of the cache or was never seen.
    /// Reads through the cache, so a hit refreshes recency.
    pub fn seen_count(&mut self, text: &str) -> usize {
        self.cache.get(&normalize(text)).unwrap_or(0)
    }

    /// Number of distinct keys currently tracked.
    #[must_use]
    pub fn tracked_keys(&self) -> usize {
        self.cache.len()
    }

    /// Records one more observation of `key`.
    fn observe(&mut self, key: &str) {
        let count = self.cache.get(key).unwrap_or(0);
        self.cache.put(key, count + 1);
    }
}
