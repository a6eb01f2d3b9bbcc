//! Load-Once Embedder Pool
//!
//! Embedding providers are an explicit, cached resource: the first
//! acquisition of a model identifier constructs the provider, subsequent
//! acquisitions return the shared read-only instance. Construction
//! happens inside the map-entry critical section, so concurrent requests
//! for the same model never race to load it twice.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::info;

use semdiff_application::ports::providers::{EmbeddingModelPool, EmbeddingProvider};
use semdiff_application::ports::registry::{EmbeddingProviderConfig, resolve_embedding_provider};
use semdiff_domain::error::{Error, Result};
use semdiff_domain::value_objects::model::EmbeddingModelSpec;

/// Pool of loaded embedding providers, one per catalog model
pub struct CachedEmbedderPool {
    provider_kind: String,
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
    loaded: DashMap<String, Arc<dyn EmbeddingProvider>>,
}

impl CachedEmbedderPool {
    /// Create a pool resolving providers of the given registered kind
    ///
    /// # Arguments
    /// * `provider_kind` - Registry name ("inference-server", "null", ...)
    /// * `endpoint` - Inference server URL, for providers that need one
    /// * `timeout_secs` - Request timeout override
    pub fn new(
        provider_kind: impl Into<String>,
        endpoint: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Self {
        Self {
            provider_kind: provider_kind.into(),
            endpoint,
            timeout_secs,
            loaded: DashMap::new(),
        }
    }

    /// Number of models currently loaded
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }
}

impl EmbeddingModelPool for CachedEmbedderPool {
    fn acquire(&self, model: &EmbeddingModelSpec) -> Result<Arc<dyn EmbeddingProvider>> {
        match self.loaded.entry(model.id.to_string()) {
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                let mut config = EmbeddingProviderConfig::new(&self.provider_kind)
                    .with_model(model.id)
                    .with_dimensions(model.dimensions);
                if let Some(endpoint) = &self.endpoint {
                    config = config.with_endpoint(endpoint);
                }
                if let Some(timeout_secs) = self.timeout_secs {
                    config = config.with_timeout_secs(timeout_secs);
                }

                let provider = resolve_embedding_provider(&config)
                    .map_err(|message| Error::model_unavailable(model.id, message))?;

                info!(
                    model = model.id,
                    provider = %self.provider_kind,
                    "loaded embedding provider"
                );

                entry.insert(provider.clone());
                Ok(provider)
            }
        }
    }
}
