//! # Semdiff Domain Layer
//!
//! Core types for cross-lingual semantic drift detection. This crate holds
//! the vocabulary shared by every other layer: segmented sentences,
//! embedding vectors, the fixed embedding-model catalog, comparison
//! outcomes, and the error taxonomy.
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Sentence`] | Trimmed, position-indexed unit of a segmented text |
//! | [`Embedding`] | Fixed-dimension vector representation of one sentence |
//! | [`EmbeddingModelSpec`] | Catalog entry for a supported embedding model |
//! | [`DirectionalDiff`] | Unmatched sentences of one comparison direction |
//! | [`ComparisonOutcome`] | Both sentence sequences plus both diff index sets |
//! | [`Error`] | Domain error taxonomy |
//!
//! This crate has no I/O and no async machinery; it is a pure library that
//! the application, provider, infrastructure, and server layers build on.

/// Error handling types
pub mod error;

/// Domain-level constants (thresholds, default model, dimensions)
pub mod constants;

/// Immutable domain value objects
pub mod value_objects;

// Re-export the most commonly used types at the crate root
pub use error::{Error, Result};
pub use value_objects::comparison::{ComparisonOutcome, DirectionalDiff};
pub use value_objects::embedding::Embedding;
pub use value_objects::model::{
    EmbeddingModelSpec, catalog_ids, default_model, is_cataloged, resolve_model,
};
pub use value_objects::sentence::Sentence;
