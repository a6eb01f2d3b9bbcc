//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings for testing purposes.
//! No external dependencies - always works offline.

use std::sync::Arc;

use async_trait::async_trait;

use semdiff_application::ports::providers::EmbeddingProvider;
use semdiff_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use semdiff_domain::constants::EMBEDDING_DIMENSION_NULL;
use semdiff_domain::error::Result;
use semdiff_domain::value_objects::Embedding;

/// Null embedding provider for testing
///
/// Returns fixed-size vectors derived from the input text hash. Identical
/// text always yields an identical vector, so determinism-dependent
/// properties (idempotence, identity comparisons) hold without a real
/// model.
pub struct NullEmbeddingProvider;

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let embeddings = texts
            .iter()
            .map(|text| {
                // Deterministic test embedding based on text content only
                let hash = text.bytes().fold(0u32, |acc, b| {
                    acc.wrapping_mul(31).wrapping_add(u32::from(b))
                });
                let base_value = (hash % 1000) as f32 / 1000.0;

                let vector = (0..EMBEDDING_DIMENSION_NULL)
                    .map(|j| {
                        let variation = ((hash % 97) as f32 + j as f32 * 0.01).sin();
                        (base_value + variation * 0.1).clamp(0.0, 1.0)
                    })
                    .collect();

                Embedding {
                    vector,
                    model: "null".to_string(),
                    dimensions: EMBEDDING_DIMENSION_NULL,
                }
            })
            .collect();

        Ok(embeddings)
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION_NULL
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

/// Factory function for creating null provider instances
fn null_provider_factory(
    _config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    Ok(Arc::new(NullEmbeddingProvider::new()))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "null",
    description: "Null provider for testing (deterministic hash-based embeddings)",
    factory: null_provider_factory,
};
