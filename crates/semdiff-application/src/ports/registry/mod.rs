//! Provider Registry System
//!
//! Auto-registration infrastructure for embedding providers. Uses the
//! `linkme` crate for compile-time registration of providers that are
//! discovered and instantiated at runtime by name.
//!
//! ## Usage
//!
//! ### Registering a Provider (in semdiff-providers)
//!
//! ```ignore
//! use semdiff_application::ports::registry::{EMBEDDING_PROVIDERS, EmbeddingProviderEntry};
//!
//! #[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
//! static INFERENCE_SERVER_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
//!     name: "inference-server",
//!     description: "OpenAI-compatible /embeddings backend",
//!     factory: inference_server_factory,
//! };
//! ```
//!
//! ### Resolving a Provider
//!
//! ```ignore
//! use semdiff_application::ports::registry::{EmbeddingProviderConfig, resolve_embedding_provider};
//!
//! let config = EmbeddingProviderConfig::new("inference-server")
//!     .with_model("sentence-transformers/LaBSE");
//! let provider = resolve_embedding_provider(&config)?;
//! ```

/// Embedding provider registry
pub mod embedding;

pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
    list_embedding_providers, resolve_embedding_provider,
};
