//! # rs-dedup
//!
//! Bounded-memory duplicate and boilerplate filtering for web content
//! extraction pipelines.
//!
//! As HTML-derived text blocks stream through an extraction pipeline, this
//! library decides per block whether its content is a repeat of something
//! seen often enough recently to be boilerplate (navigation text,
//! share-button labels, repeated footers) rather than genuine article
//! content. It works single-pass and bounds memory regardless of corpus
//! size via a fixed-capacity LRU cache of observation counts.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_dedup::{BlockFilter, DocumentMeta, LanguageIdentifier, Options, TextBlock};
//!
//! let mut filter = BlockFilter::new(
//!     &Options::default(),
//!     LanguageIdentifier::Unavailable,
//!     DocumentMeta::default(),
//! )?;
//!
//! let block = TextBlock::with_text("The main body of the article goes here.");
//! let decision = filter.evaluate(&block, None);
//! assert!(decision.is_keep());
//! # Ok::<(), rs_dedup::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Duplicate Detection**: frequency-counting LRU cache flags text seen
//!   more than a configurable number of times
//! - **Structural Filtering**: drops empty blocks and share/print/social
//!   button labels
//! - **Language Gating**: optional external language identifier; fails open
//!   when absent
//! - **Content Fingerprinting**: deterministic SHA-1 digests over
//!   significant tokens for cross-document identity comparison
//!
//! The individual pieces (`FrequencyCache`, `DuplicateDetector`, the
//! `textfilter` predicates, `language_filter`, `fingerprint`) are exposed
//! for hosts that want to wire their own pipeline order.

mod error;
mod options;
mod patterns;

/// Duplicate text detection over a bounded frequency cache.
pub mod dedup;

/// Text normalization and content fingerprinting.
pub mod fingerprint;

/// Language gating against an optional external identifier.
pub mod language;

/// LRU cache for text deduplication.
pub mod lru;

/// Per-block filtering pipeline (structural -> duplicate -> language).
pub mod pipeline;

/// Structural text filtering predicates.
pub mod textfilter;

// Public API - re-exports
pub use dedup::DuplicateDetector;
pub use error::{Error, Result};
pub use language::{DocumentMeta, LanguageDetection, LanguageIdentifier};
pub use lru::FrequencyCache;
pub use options::Options;
pub use pipeline::{BlockDecision, BlockFilter, DropReason, FilterStats};
pub use textfilter::TextBlock;
