//! Embedding Provider Registry
//!
//! Providers register themselves via `#[linkme::distributed_slice]` and
//! are resolved at runtime by provider name. The registry decouples the
//! pool and server wiring from concrete provider types.

use std::sync::Arc;

use crate::ports::providers::EmbeddingProvider;

/// Configuration for embedding provider creation
///
/// Contains the options a provider might need. Providers use what they
/// need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct EmbeddingProviderConfig {
    /// Provider name (e.g. "inference-server", "null")
    pub provider: String,
    /// Embedding model identifier the provider should serve
    pub model: Option<String>,
    /// Base URL of the backing inference server
    pub endpoint: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Expected embedding dimensions, when known
    pub dimensions: Option<usize>,
}

impl EmbeddingProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the inference server endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Set the expected dimensions
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }
}

/// Registry entry for embedding providers
///
/// Each provider implementation registers one entry with
/// `#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]`.
pub struct EmbeddingProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function creating a provider instance
    pub factory: fn(&EmbeddingProviderConfig) -> Result<Arc<dyn EmbeddingProvider>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static EMBEDDING_PROVIDERS: [EmbeddingProviderEntry] = [..];

/// Resolve an embedding provider by name from the registry
///
/// Searches the registry for an entry matching the configured provider
/// name and creates an instance using its factory function.
pub fn resolve_embedding_provider(
    config: &EmbeddingProviderConfig,
) -> Result<Arc<dyn EmbeddingProvider>, String> {
    for entry in EMBEDDING_PROVIDERS {
        if entry.name == config.provider {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = EMBEDDING_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown embedding provider '{}'. Available providers: {:?}",
        config.provider, available
    ))
}

/// List all registered embedding providers as (name, description) pairs
pub fn list_embedding_providers() -> Vec<(&'static str, &'static str)> {
    EMBEDDING_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
