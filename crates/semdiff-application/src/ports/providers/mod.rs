//! Provider Ports
//!
//! Ports for external services and providers that the comparison pipeline
//! depends on.
//!
//! ## Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`EmbeddingProvider`] | Sentence embedding generation |
//! | [`EmbeddingModelPool`] | Load-once acquisition of embedding providers |
//! | [`SentenceSegmenter`] | Language-specific sentence boundary detection |
//! | [`ArticleSegmenter`] | Full segmentation engine with language dispatch |
//! | [`DocumentSource`] | External article retrieval (boundary only) |
//! | [`LlmComparator`] | Alternative LLM-based comparison (boundary only) |

/// External document source port
pub mod document_source;
/// Embedding provider and pool ports
pub mod embedding;
/// LLM comparator port
pub mod llm_comparison;
/// Sentence segmentation ports
pub mod segmentation;

pub use document_source::{DocumentSource, SourceDocument};
pub use embedding::{EmbeddingModelPool, EmbeddingProvider};
pub use llm_comparison::{LlmComparator, LlmComparison};
pub use segmentation::{ArticleSegmenter, SentenceSegmenter};
