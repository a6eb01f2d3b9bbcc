//! Embedding Provider Ports

use std::sync::Arc;

use async_trait::async_trait;

use semdiff_domain::error::Result;
use semdiff_domain::value_objects::model::EmbeddingModelSpec;
use semdiff_domain::value_objects::Embedding;

/// Semantic Embedding Interface
///
/// Contract for providers that transform sentences into semantic
/// embeddings. The pipeline treats the underlying model as a pure
/// function of sentence text: identical text with the same model yields
/// the same vector. Determinism is assumed, not re-verified here.
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with a single item, and
/// `health_check()` performs a trivial embed. Providers only need to
/// implement `embed_batch()` unless they have something better.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| semdiff_domain::error::Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts, one per input, same order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Identifier of this provider implementation (e.g. "inference-server", "null")
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        self.embed("health check").await?;
        Ok(())
    }
}

/// Load-Once Embedding Model Pool
///
/// Acquires the provider serving a cataloged model. The first acquisition
/// of a model identifier constructs (loads) the provider; subsequent
/// acquisitions are pure lookups returning the shared, read-only
/// instance. Construction for a given model identifier is a critical
/// section so concurrent requests never load the same model twice.
pub trait EmbeddingModelPool: Send + Sync {
    /// Acquire the provider for a cataloged model, loading it on first use
    fn acquire(&self, model: &EmbeddingModelSpec) -> Result<Arc<dyn EmbeddingProvider>>;
}
