//! # Semdiff Provider Implementations
//!
//! Concrete implementations of the ports defined in
//! `semdiff-application`. Each provider implements a trait from the
//! application layer and registers itself with the provider registry
//! where applicable.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | OpenAI-compatible inference server, Null |
//! | Embedding pool | `EmbeddingModelPool` | `CachedEmbedderPool` (load-once) |
//! | Segmentation | `ArticleSegmenter` | `SegmentationEngine` (7 languages + universal fallback) |
//! | Document source | `DocumentSource` | `InMemoryDocumentSource` (testing/development) |
//! | LLM comparison | `LlmComparator` | `NullLlmComparator` (testing/development) |
//!
//! ## Feature Flags
//!
//! Linguistic segmentation languages can be compiled out individually:
//!
//! ```toml
//! [dependencies]
//! semdiff-providers = { version = "0.1", default-features = false, features = ["lang-en", "lang-fr"] }
//! ```
//!
//! Compiling a language out does not undeclare it: requests for a
//! declared language whose segmenter is missing fail with
//! `ResourceUnavailable` rather than silently degrading to the universal
//! splitter.

// Re-export semdiff-domain types commonly used with providers
pub use semdiff_domain::error::{Error, Result};

/// Embedding provider implementations
///
/// Implements the `EmbeddingProvider` trait for embedding backends.
pub mod embedding;

/// Sentence segmentation implementations
///
/// Implements `ArticleSegmenter` and the per-language rule segmenters.
pub mod segmentation;

/// Document source implementations
///
/// Implements the `DocumentSource` boundary port.
pub mod document_source;

/// LLM comparator implementations
///
/// Implements the `LlmComparator` boundary port.
pub mod llm;
