//! Embedding Model Catalog
//!
//! The fixed, enumerable set of embedding models the service supports.
//! Selection is a catalog lookup, not open-ended string dispatch: the
//! strict request boundary validates selectors with [`is_cataloged`],
//! while the convenience path resolves unknown selectors to the
//! documented default via [`resolve_model`].

use crate::constants::DEFAULT_EMBEDDING_MODEL;

/// Catalog entry for one supported embedding model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddingModelSpec {
    /// Model identifier as accepted from callers
    pub id: &'static str,
    /// Dimensionality of vectors produced by this model
    pub dimensions: usize,
    /// Short human-readable description
    pub description: &'static str,
}

/// The fixed catalog of supported embedding models
pub const EMBEDDING_MODEL_CATALOG: &[EmbeddingModelSpec] = &[
    EmbeddingModelSpec {
        id: "sentence-transformers/LaBSE",
        dimensions: 768,
        description: "Language-agnostic BERT sentence embeddings (109 languages)",
    },
    EmbeddingModelSpec {
        id: "xlm-roberta-base",
        dimensions: 768,
        description: "Multilingual RoBERTa base model",
    },
    EmbeddingModelSpec {
        id: "multi-qa-distilbert-cos-v1",
        dimensions: 768,
        description: "DistilBERT tuned for semantic search, cosine objective",
    },
    EmbeddingModelSpec {
        id: "multi-qa-MiniLM-L6-cos-v1",
        dimensions: 384,
        description: "MiniLM tuned for semantic search, cosine objective",
    },
    EmbeddingModelSpec {
        id: "multi-qa-mpnet-base-cos-v1",
        dimensions: 768,
        description: "MPNet tuned for semantic search, cosine objective",
    },
];

/// The catalog entry used when a selector does not resolve
pub fn default_model() -> &'static EmbeddingModelSpec {
    resolve_model(DEFAULT_EMBEDDING_MODEL)
}

/// Resolve a model selector against the catalog
///
/// Unknown selectors resolve to the default model rather than failing.
/// Callers that must reject unknown selectors (the strict request
/// boundary) check [`is_cataloged`] first.
pub fn resolve_model(selector: &str) -> &'static EmbeddingModelSpec {
    EMBEDDING_MODEL_CATALOG
        .iter()
        .find(|spec| spec.id == selector)
        .unwrap_or(&EMBEDDING_MODEL_CATALOG[0])
}

/// Whether a selector names a cataloged model
pub fn is_cataloged(selector: &str) -> bool {
    EMBEDDING_MODEL_CATALOG.iter().any(|spec| spec.id == selector)
}

/// All catalog identifiers, in catalog order
pub fn catalog_ids() -> Vec<&'static str> {
    EMBEDDING_MODEL_CATALOG.iter().map(|spec| spec.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_model() {
        let spec = resolve_model("multi-qa-MiniLM-L6-cos-v1");
        assert_eq!(spec.id, "multi-qa-MiniLM-L6-cos-v1");
        assert_eq!(spec.dimensions, 384);
    }

    #[test]
    fn resolve_unknown_model_falls_back_to_default() {
        let spec = resolve_model("no-such-model");
        assert_eq!(spec.id, DEFAULT_EMBEDDING_MODEL);
        assert_eq!(spec.dimensions, 768);
    }

    #[test]
    fn is_cataloged_rejects_unknown_model() {
        assert!(is_cataloged("sentence-transformers/LaBSE"));
        assert!(!is_cataloged("no-such-model"));
    }

    #[test]
    fn catalog_lists_five_models() {
        assert_eq!(catalog_ids().len(), 5);
        assert_eq!(catalog_ids()[0], DEFAULT_EMBEDDING_MODEL);
    }
}
