//! Sentence Segmentation Ports

use semdiff_domain::error::Result;
use semdiff_domain::value_objects::Sentence;

/// Language-Specific Sentence Segmenter
///
/// Boundary detection for one language, abbreviation-aware and
/// punctuation-aware. Implementations receive text that has already been
/// through line-break normalization and return raw sentence pieces in
/// left-to-right order; the engine assigns positions and drops empties.
pub trait SentenceSegmenter: Send + Sync {
    /// Split normalized text into sentence pieces, in order
    fn split(&self, text: &str) -> Vec<String>;

    /// Language code this segmenter serves
    fn language(&self) -> &'static str;
}

/// Segmentation Engine
///
/// The full `segment(text, language_code)` contract: normalizes line
/// breaks, dispatches to a registered [`SentenceSegmenter`] when the
/// language has one, and falls back to the universal heuristic splitter
/// for unregistered codes. A language that is *declared* supported but
/// whose segmenter cannot be provisioned at run time yields a
/// `ResourceUnavailable` error, never the universal fallback.
pub trait ArticleSegmenter: Send + Sync {
    /// Segment text into an ordered sequence of sentences
    ///
    /// Output ordering matches left-to-right position in the cleaned
    /// input, and the sequence contains no empty or whitespace-only
    /// sentences. Empty input yields an empty sequence.
    fn segment(&self, text: &str, language_code: &str) -> Result<Vec<Sentence>>;

    /// Whether a language code has a declared linguistic segmenter
    fn is_linguistic(&self, language_code: &str) -> bool;

    /// Language codes with declared linguistic segmentation support
    fn declared_languages(&self) -> &'static [&'static str];
}
