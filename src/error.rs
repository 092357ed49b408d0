//! Error types for rs-dedup.
//!
//! This module defines the error types returned by filter construction.
//! Filtering itself is infallible: malformed or empty input degrades to
//! "no usable text" and a missing language identifier degrades to
//! pass-through, so the only failure mode left is bad configuration.

/// Error type for filter construction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The deduplication cache was configured with zero capacity.
    #[error("cache capacity must be greater than zero")]
    InvalidCacheCapacity,
}

/// Result type alias for filter construction.
pub type Result<T> = std::result::Result<T, Error>;
