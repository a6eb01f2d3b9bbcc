//! Semantic Embedding Value Objects

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Sentence Embedding
///
/// A fixed-dimension vector embedding of one sentence in a shared semantic
/// space, usable across languages. Embeddings are produced by exactly one
/// model per comparison request and are never shared or cached across
/// requests.
///
/// ## Business Rules
///
/// - Dimensions must match the vector length
/// - All embeddings produced by a single model invocation have uniform
///   dimensionality
/// - Model name identifies the embedding generation method
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Create an embedding, deriving dimensions from the vector length
    pub fn new(vector: Vec<f32>, model: impl Into<String>) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_dimensions_from_vector() {
        let embedding = Embedding::new(vec![0.1, 0.2, 0.3], "sentence-transformers/LaBSE");
        assert_eq!(embedding.dimensions, 3);
        assert_eq!(embedding.model, "sentence-transformers/LaBSE");
    }
}
