//! Language gating against an optional external identifier.
//!
//! Language identification is optional infrastructure: the capability may be
//! entirely absent at runtime, in which case the gate degrades to
//! pass-through with a warning rather than blocking the pipeline.

use tracing::warn;

/// Best-effort classification returned by a language identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageDetection {
    /// ISO 639-1 language code, e.g. "en".
    pub language: String,
    /// Classifier confidence in `[0, 1]`, when the backend reports one.
    pub confidence: Option<f64>,
}

/// An external language-identification capability that may be absent.
///
/// Callers branch on the variant, never on an "is it installed" flag. The
/// identify function is expected to be non-throwing: malformed input yields
/// a best-effort or unknown classification, not a panic.
pub enum LanguageIdentifier {
    /// A working identifier backend.
    Available(Box<dyn Fn(&str) -> LanguageDetection + Send + Sync>),
    /// No identifier installed; the gate fails open.
    Unavailable,
}

impl LanguageIdentifier {
    /// Wraps a classification function as an available capability.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rs_dedup::{LanguageDetection, LanguageIdentifier};
    ///
    /// let identifier = LanguageIdentifier::from_fn(|_text| LanguageDetection {
    ///     language: "en".to_string(),
    ///     confidence: Some(0.99),
    /// });
    /// assert!(identifier.is_available());
    /// ```
    pub fn from_fn<F>(identify: F) -> Self
    where
        F: Fn(&str) -> LanguageDetection + Send + Sync + 'static,
    {
        Self::Available(Box::new(identify))
    }

    /// Returns true for the `Available` variant.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

impl std::fmt::Debug for LanguageIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available(_) => f.write_str("LanguageIdentifier::Available"),
            Self::Unavailable => f.write_str("LanguageIdentifier::Unavailable"),
        }
    }
}

/// Document identity used to annotate language-mismatch warnings.
///
/// Read-only for logging; the filter does not depend on any other shape of
/// the host's metadata store.
#[derive(Debug, Clone, Default)]
pub struct DocumentMeta {
    /// Host-assigned document identifier.
    pub id: Option<String>,
    /// Source locator, typically the page URL.
    pub url: Option<String>,
}

/// Runs the external identifier (if installed) for language verification.
///
/// Returns true when the block should be rejected. With no target language
/// the gate is a pass-through. Otherwise the longer of `comments` and `text`
/// is classified, favoring the more linguistically representative sample.
/// An unavailable identifier never rejects; it emits one warning per call.
#[must_use]
pub fn language_filter(
    text: &str,
    comments: &str,
    target_language: Option<&str>,
    meta: &DocumentMeta,
    identifier: &LanguageIdentifier,
) -> bool {
    let Some(target) = target_language else {
        return false;
    };

    match identifier {
        LanguageIdentifier::Available(identify) => {
            let sample = if comments.chars().count() > text.chars().count() {
                comments
            } else {
                text
            };

            let detection = identify(sample);
            if detection.language != target {
                warn!(
                    detected = %detection.language,
                    confidence = ?detection.confidence,
                    target = %target,
                    id = ?meta.id,
                    url = ?meta.url,
                    "wrong language"
                );
                return true;
            }
            false
        }
        LanguageIdentifier::Unavailable => {
            warn!("language identifier not installed, no language check run");
            false
        }
    }
}
