//! Application Ports
//!
//! Contracts between the comparison pipeline and its collaborators.
//! Providers implement these traits; the server layer wires concrete
//! implementations in via the registry.

/// Provider port traits
pub mod providers;

/// Provider registry (linkme distributed slices)
pub mod registry;

pub use providers::{
    ArticleSegmenter, DocumentSource, EmbeddingModelPool, EmbeddingProvider, LlmComparator,
    LlmComparison, SentenceSegmenter, SourceDocument,
};
