//! Embedding Provider Implementations
//!
//! Converts sentences into dense vector embeddings in a shared
//! cross-lingual space.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | [`NullEmbeddingProvider`] | Testing | Complete |
//! | [`InferenceServerProvider`] | HTTP backend | Complete |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: `NullEmbeddingProvider` - deterministic
//!   hash-based vectors, always works offline
//! - **Production**: `InferenceServerProvider` - talks to an
//!   OpenAI-compatible `/embeddings` route (text-embeddings-inference,
//!   vLLM, LocalAI, ...) which hosts the actual catalog models
//!
//! All providers are read-only once constructed and safe to share across
//! concurrent requests. Construction is cheap; actual model weights live
//! behind the inference server. The [`CachedEmbedderPool`] guarantees
//! each model identifier is constructed at most once per process.

/// Inference-server backed provider
pub mod inference_server;
/// Null provider for testing
pub mod null;
/// Load-once embedder pool
pub mod pool;

// Re-export for convenience
pub use inference_server::InferenceServerProvider;
pub use null::NullEmbeddingProvider;
pub use pool::CachedEmbedderPool;
