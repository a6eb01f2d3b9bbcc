//! Segmentation Engine
//!
//! Implements the `ArticleSegmenter` port: line-break normalization,
//! dispatch to the language's rule segmenter, universal fallback for
//! unregistered codes. Segmenters are provisioned on first use and
//! cached for the life of the process.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, info, warn};

use semdiff_application::ports::providers::{ArticleSegmenter, SentenceSegmenter};
use semdiff_domain::error::{Error, Result};
use semdiff_domain::value_objects::Sentence;

use super::common::RuleSegmenter;
use super::universal::universal_split;

/// Language codes with declared linguistic segmentation support
///
/// Declaration is independent of the `lang-*` feature flags: a declared
/// language whose segmenter was compiled out fails with
/// `ResourceUnavailable` instead of silently falling back, so behavior
/// for a supported language never varies between requests.
pub const DECLARED_LANGUAGES: &[&str] = &["en", "de", "fr", "es", "it", "pt", "nl"];

/// Sentence segmentation engine with per-language dispatch
#[derive(Default)]
pub struct SegmentationEngine {
    segmenters: DashMap<&'static str, Arc<dyn SentenceSegmenter>>,
}

impl SegmentationEngine {
    /// Create a new engine; segmenters load lazily on first use
    pub fn new() -> Self {
        Self {
            segmenters: DashMap::new(),
        }
    }

    /// Construct the segmenter for a declared language, if compiled in
    fn provision(language: &'static str) -> Option<Arc<dyn SentenceSegmenter>> {
        match language {
            #[cfg(feature = "lang-en")]
            "en" => Some(Arc::new(RuleSegmenter::new(super::english::profile()))),
            #[cfg(feature = "lang-de")]
            "de" => Some(Arc::new(RuleSegmenter::new(super::german::profile()))),
            #[cfg(feature = "lang-fr")]
            "fr" => Some(Arc::new(RuleSegmenter::new(super::french::profile()))),
            #[cfg(feature = "lang-es")]
            "es" => Some(Arc::new(RuleSegmenter::new(super::spanish::profile()))),
            #[cfg(feature = "lang-it")]
            "it" => Some(Arc::new(RuleSegmenter::new(super::italian::profile()))),
            #[cfg(feature = "lang-pt")]
            "pt" => Some(Arc::new(RuleSegmenter::new(super::portuguese::profile()))),
            #[cfg(feature = "lang-nl")]
            "nl" => Some(Arc::new(RuleSegmenter::new(super::dutch::profile()))),
            _ => None,
        }
    }

    /// Look up or provision the segmenter for a declared language
    fn segmenter_for(&self, language: &'static str) -> Result<Arc<dyn SentenceSegmenter>> {
        if let Some(existing) = self.segmenters.get(language) {
            return Ok(existing.value().clone());
        }

        match Self::provision(language) {
            Some(segmenter) => {
                info!(language, "provisioned sentence segmenter");
                let entry = self.segmenters.entry(language).or_insert(segmenter);
                Ok(entry.value().clone())
            }
            None => {
                warn!(
                    language,
                    "declared language has no compiled segmenter; refusing universal fallback"
                );
                Err(Error::resource_unavailable(
                    format!("segmenter/{language}"),
                    "linguistic model is declared supported but was not compiled into this build",
                ))
            }
        }
    }
}

/// Normalize line breaks before splitting
///
/// A double line-break is a paragraph or title boundary and must not
/// become a spurious sentence break; it collapses to a single space.
/// Remaining single line-breaks become sentence-terminating punctuation.
fn normalize_breaks(text: &str) -> String {
    let parts: Vec<String> = text
        .split("\n\n")
        .map(|part| part.replace('\n', ". "))
        .collect();
    parts.join(" ").trim().to_string()
}

impl ArticleSegmenter for SegmentationEngine {
    fn segment(&self, text: &str, language_code: &str) -> Result<Vec<Sentence>> {
        let cleaned = normalize_breaks(text);
        if cleaned.is_empty() {
            return Ok(Vec::new());
        }

        let Some(&language) = DECLARED_LANGUAGES
            .iter()
            .find(|&&declared| declared == language_code)
        else {
            debug!(
                language = language_code,
                "no linguistic model registered; using universal splitter"
            );
            return Ok(Sentence::sequence(universal_split(&cleaned)));
        };

        let segmenter = self.segmenter_for(language)?;
        Ok(Sentence::sequence(segmenter.split(&cleaned)))
    }

    fn is_linguistic(&self, language_code: &str) -> bool {
        DECLARED_LANGUAGES.contains(&language_code)
    }

    fn declared_languages(&self) -> &'static [&'static str] {
        DECLARED_LANGUAGES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_paragraph_breaks() {
        assert_eq!(
            normalize_breaks("Hello world.\n\nSecond para.\nThird line."),
            "Hello world. Second para.. Third line."
        );
    }

    #[test]
    fn normalize_trims_surrounding_whitespace() {
        assert_eq!(normalize_breaks("\n\nTitle\nBody"), "Title. Body");
    }
}
