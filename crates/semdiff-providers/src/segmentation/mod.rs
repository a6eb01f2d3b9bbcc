//! Sentence Segmentation Implementations
//!
//! Turns raw article text into an ordered sequence of sentences.
//!
//! ## Architecture
//!
//! - [`engine::SegmentationEngine`] implements the `ArticleSegmenter`
//!   port: line-break normalization, dispatch to a language-specific
//!   rule segmenter, and the universal fallback for unregistered codes.
//! - [`common`] holds the shared abbreviation-aware splitter built on
//!   UAX-29 word boundaries, parameterized by a per-language profile.
//! - One module per supported language contributes its
//!   [`common::LanguageProfile`], mirroring how abbreviation inventories
//!   differ across languages.
//!
//! ## Supported Languages
//!
//! English, German, French, Spanish, Italian, Portuguese, Dutch - each
//! behind a `lang-*` feature flag (all on by default). Unregistered
//! language codes get the cruder universal splitter; that approximation
//! is documented behavior, not a bug.

/// Shared profile-driven rule splitter
pub mod common;
/// Segmentation engine (ArticleSegmenter implementation)
pub mod engine;
/// Universal punctuation-based fallback splitter
pub mod universal;

#[cfg(feature = "lang-nl")]
pub mod dutch;
#[cfg(feature = "lang-en")]
pub mod english;
#[cfg(feature = "lang-fr")]
pub mod french;
#[cfg(feature = "lang-de")]
pub mod german;
#[cfg(feature = "lang-it")]
pub mod italian;
#[cfg(feature = "lang-pt")]
pub mod portuguese;
#[cfg(feature = "lang-es")]
pub mod spanish;

// Re-export for convenience
pub use common::{LanguageProfile, RuleSegmenter};
pub use engine::{DECLARED_LANGUAGES, SegmentationEngine};
pub use universal::universal_split;
